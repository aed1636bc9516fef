use crate::model::task::Task;

/// Identity of one of the three task lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Yesterday,
    Today,
    Weekly,
}

impl ListKind {
    /// All lists in pane order
    pub const ALL: [ListKind; 3] = [ListKind::Yesterday, ListKind::Today, ListKind::Weekly];

    /// File name inside the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            ListKind::Yesterday => "yesterday.txt",
            ListKind::Today => "todos.txt",
            ListKind::Weekly => "weekly.txt",
        }
    }

    /// Pane title shown in the TUI
    pub fn title(self) -> &'static str {
        match self {
            ListKind::Yesterday => "Things (Hopefully) Done Yesterday",
            ListKind::Today => "Today's Todos",
            ListKind::Weekly => "Weekly Todos",
        }
    }
}

/// One named list of tasks.
///
/// `all` is the authoritative, insertion-ordered sequence used for
/// persistence. Display filtering never touches it: the visible projection is
/// a vector of indices into `all`, so a row selected in a filtered view maps
/// back to exactly the entry it came from, duplicate titles or not.
#[derive(Debug, Clone)]
pub struct TaskList {
    pub kind: ListKind,
    pub all: Vec<Task>,
}

impl TaskList {
    pub fn new(kind: ListKind, tasks: Vec<Task>) -> Self {
        TaskList { kind, all: tasks }
    }

    /// Indices of the tasks currently shown, in backing order.
    /// With `hide_done` set, completed tasks are projected out.
    pub fn visible(&self, hide_done: bool) -> Vec<usize> {
        self.all
            .iter()
            .enumerate()
            .filter(|(_, t)| !hide_done || !t.done)
            .map(|(i, _)| i)
            .collect()
    }

    /// Flip the completion flag on the backing entry at `index`.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(task) = self.all.get_mut(index) {
            task.done = !task.done;
        }
    }
}
