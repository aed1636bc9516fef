use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{Datelike, Days, NaiveDate};

use crate::model::{ListKind, Task};
use crate::parse::DateStamp;

/// File name of the append-only rollover audit log
pub const ROLLOVER_LOG: &str = "unticked.log";

/// Reconcile a freshly decoded list against the current date.
///
/// When the file's stamp is present and names a different day, every task
/// read as completed is reset to incomplete; the returned titles are the
/// audit events for those resets. A missing stamp or a same-day stamp leaves
/// the flags untouched and yields no events.
pub fn reconcile(tasks: &mut [Task], stamp: Option<DateStamp>, today: NaiveDate) -> Vec<String> {
    let different_day = match stamp {
        Some(s) => !s.matches(today),
        None => false,
    };
    if !different_day {
        return Vec::new();
    }

    let mut events = Vec::new();
    for task in tasks.iter_mut() {
        if task.done {
            task.done = false;
            events.push(task.title.clone());
        }
    }
    events
}

/// The date recorded with a list's rollover events. The yesterday list holds
/// the prior day's tasks, so its events are attributed to that day.
pub fn log_date(kind: ListKind, today: NaiveDate) -> NaiveDate {
    match kind {
        ListKind::Yesterday => today.checked_sub_days(Days::new(1)).unwrap_or(today),
        _ => today,
    }
}

/// Append one `Y-M-D: <title>` line per event to the rollover log.
/// The log is opened create+append and never truncated or read back.
pub fn append_rollover_log(dir: &Path, date: NaiveDate, titles: &[String]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(ROLLOVER_LOG))?;
    for title in titles {
        writeln!(
            file,
            "{}-{}-{}: {}",
            date.year(),
            date.month(),
            date.day(),
            title
        )?;
    }
    Ok(())
}
