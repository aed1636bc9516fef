use chrono::NaiveDate;

use crate::model::Task;
use crate::parse::DONE_MARKER;
use crate::parse::date_stamp::DateStamp;

/// Encode a list for persistence: a fresh date stamp for `today` on line 1,
/// then one line per task in backing order.
pub fn serialize_list(tasks: &[Task], today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&DateStamp::for_date(today).to_line());
    out.push('\n');

    for task in tasks {
        if task.done {
            out.push_str(DONE_MARKER);
        }
        out.push_str(&task.title);
        if let Some(command) = &task.command {
            out.push_str(", ");
            out.push_str(command);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_list;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_serialize_empty_list_is_stamp_only() {
        assert_eq!(serialize_list(&[], day()), "7,3,2026\n");
    }

    #[test]
    fn test_serialize_markers_and_commands() {
        let mut done = Task::with_command("Standup", "open https://meet.example.com");
        done.done = true;
        let tasks = vec![done, Task::new("Write report")];
        assert_eq!(
            serialize_list(&tasks, day()),
            "7,3,2026\n✅ Standup, open https://meet.example.com\nWrite report\n"
        );
    }

    #[test]
    fn test_same_day_roundtrip_is_lossless() {
        let source = "7,3,2026\n✅ Buy milk\nWrite report, vi report.txt\n✅ Standup, open url\n";
        let parsed = parse_list(source);
        assert_eq!(serialize_list(&parsed.tasks, day()), source);
    }

    #[test]
    fn test_reencode_preserves_tasks_under_fresh_stamp() {
        let parsed = parse_list("1,1,2020\nAlpha\n✅ Beta\n");
        let reencoded = serialize_list(&parsed.tasks, day());
        let reparsed = parse_list(&reencoded);
        assert_eq!(reparsed.tasks, parsed.tasks);
        assert_eq!(reparsed.stamp, Some(DateStamp::for_date(day())));
    }
}
