/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task title text
    pub title: String,
    /// Completion flag
    pub done: bool,
    /// Optional shell command launched by "open"
    pub command: Option<String>,
}

impl Task {
    /// Create a new incomplete task with no command
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            done: false,
            command: None,
        }
    }

    /// Create a task with an attached command
    pub fn with_command(title: impl Into<String>, command: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            done: false,
            command: Some(command.into()),
        }
    }
}
