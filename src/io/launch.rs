use std::process::{Command, Stdio};

/// Launch a task's command through the shell, fire-and-forget.
///
/// The child is never waited on and its outcome is unobserved; stdio is
/// detached so it cannot scribble over the terminal while the TUI owns it.
pub fn launch(command: &str) {
    let _ = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
}
