use crate::model::Task;
use crate::parse::DONE_MARKER;
use crate::parse::date_stamp::DateStamp;

/// Result of decoding one list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedList {
    /// Date stamp from line 1, if that line parsed as one
    pub stamp: Option<DateStamp>,
    /// Tasks in file line order
    pub tasks: Vec<Task>,
}

/// Decode a list file.
///
/// Line 1 is tried as a `D,M,Y` date stamp. If it does not parse as one it is
/// not discarded: it is read as the first task line, and the caller sees no
/// stamp (which skips rollover detection for this load).
pub fn parse_list(source: &str) -> ParsedList {
    let mut lines = source.lines();
    let mut stamp = None;
    let mut tasks = Vec::new();

    if let Some(first) = lines.next() {
        match DateStamp::from_line(first) {
            Some(s) => stamp = Some(s),
            None => tasks.push(parse_task_line(first)),
        }
    }
    for line in lines {
        tasks.push(parse_task_line(line));
    }

    ParsedList { stamp, tasks }
}

/// Decode one task line: `[✅ ]<title>[, <command>]`.
///
/// The command split happens on the first `", "` of the whole line, before
/// the marker is stripped, so a command may itself contain `", "`.
fn parse_task_line(line: &str) -> Task {
    let (head, command) = match line.split_once(", ") {
        Some((head, cmd)) if !cmd.is_empty() => (head, Some(cmd.to_string())),
        Some((head, _)) => (head, None),
        None => (line, None),
    };

    let (title, done) = match head.strip_prefix(DONE_MARKER) {
        Some(rest) => (rest, true),
        None => (head, false),
    };

    Task {
        title: title.to_string(),
        done,
        command,
    }
}
