use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::ProjectDirs;
use tempfile::NamedTempFile;

use crate::io::rollover::{append_rollover_log, log_date, reconcile};
use crate::model::{ListKind, TaskList};
use crate::parse::{parse_list, serialize_list};

/// Error type for list store I/O. Everything here is fatal when it reaches
/// `main`; the non-fatal cases (missing file, unwritable rollover log) are
/// absorbed before an error is constructed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not resolve a data directory for this user")]
    DataDir,
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Resolve (and create if needed) the per-user data directory, honoring an
/// explicit override from the command line.
pub fn data_dir(override_dir: Option<&Path>) -> Result<PathBuf, StoreError> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => ProjectDirs::from("", "", "accountability")
            .ok_or(StoreError::DataDir)?
            .config_dir()
            .to_path_buf(),
    };
    fs::create_dir_all(&dir).map_err(|e| StoreError::Write {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

/// Load one list from the data directory, applying day-rollover
/// reconciliation against `today`.
///
/// A missing file is not an error: a date-stamp-only file is created and an
/// empty list returned. A rollover log that cannot be appended to is reported
/// on stderr and skipped; the in-memory completion reset still happens.
pub fn load_list(dir: &Path, kind: ListKind, today: NaiveDate) -> Result<TaskList, StoreError> {
    let path = dir.join(kind.file_name());
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let content = serialize_list(&[], today);
            atomic_write(&path, content.as_bytes())
                .map_err(|e| StoreError::Write { path, source: e })?;
            return Ok(TaskList::new(kind, Vec::new()));
        }
        Err(e) => return Err(StoreError::Read { path, source: e }),
    };

    let mut parsed = parse_list(&text);
    let events = reconcile(&mut parsed.tasks, parsed.stamp, today);
    if !events.is_empty()
        && let Err(e) = append_rollover_log(dir, log_date(kind, today), &events)
    {
        eprintln!("warning: could not append to rollover log: {}", e);
    }

    Ok(TaskList::new(kind, parsed.tasks))
}

/// Persist one list under a fresh date stamp for `today`.
///
/// The content goes to a sibling temp file first and is renamed over the
/// destination, so a failure at any point leaves the last saved file intact.
pub fn save_list(dir: &Path, list: &TaskList, today: NaiveDate) -> Result<(), StoreError> {
    let path = dir.join(list.kind.file_name());
    let content = serialize_list(&list.all, today);
    atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::Write { path, source: e })
}

/// Write `content` to `path` atomically via a temp file in the same directory
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rollover::ROLLOVER_LOG;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_missing_file_bootstrap() {
        let tmp = TempDir::new().unwrap();
        let list = load_list(tmp.path(), ListKind::Today, today()).unwrap();
        assert!(list.all.is_empty());

        // A date-stamp-only file now exists and loads cleanly
        let path = tmp.path().join(ListKind::Today.file_name());
        assert_eq!(fs::read_to_string(&path).unwrap(), "7,3,2026\n");
        let reloaded = load_list(tmp.path(), ListKind::Today, today()).unwrap();
        assert!(reloaded.all.is_empty());
    }

    #[test]
    fn test_same_day_reload_preserves_flags() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(ListKind::Today.file_name());
        fs::write(&path, "7,3,2026\n✅ Buy milk\nWrite report\n").unwrap();

        let list = load_list(tmp.path(), ListKind::Today, today()).unwrap();
        assert!(list.all[0].done);
        assert!(!list.all[1].done);
        assert!(!tmp.path().join(ROLLOVER_LOG).exists());

        save_list(tmp.path(), &list, today()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "7,3,2026\n✅ Buy milk\nWrite report\n"
        );
    }

    #[test]
    fn test_rollover_clears_and_logs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(ListKind::Today.file_name());
        fs::write(&path, "6,3,2026\n✅ Buy milk\nWrite report\n").unwrap();

        let list = load_list(tmp.path(), ListKind::Today, today()).unwrap();
        assert!(list.all.iter().all(|t| !t.done));

        let log = fs::read_to_string(tmp.path().join(ROLLOVER_LOG)).unwrap();
        assert_eq!(log, "2026-3-7: Buy milk\n");
    }

    #[test]
    fn test_yesterday_rollover_logged_with_prior_day() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(ListKind::Yesterday.file_name());
        fs::write(&path, "6,3,2026\n✅ Standup\n").unwrap();

        load_list(tmp.path(), ListKind::Yesterday, today()).unwrap();

        let log = fs::read_to_string(tmp.path().join(ROLLOVER_LOG)).unwrap();
        assert_eq!(log, "2026-3-6: Standup\n");
    }

    #[test]
    fn test_malformed_stamp_keeps_flags_and_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(ListKind::Weekly.file_name());
        fs::write(&path, "not a date\n✅ Buy milk\n").unwrap();

        let list = load_list(tmp.path(), ListKind::Weekly, today()).unwrap();
        assert_eq!(list.all[0].title, "not a date");
        assert!(list.all[1].done);
        assert!(!tmp.path().join(ROLLOVER_LOG).exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.txt");

        atomic_write(&path, b"hello world").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");

        atomic_write(&path, b"goodbye").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "goodbye");
    }

    #[test]
    fn test_failed_save_leaves_destination_untouched() {
        let tmp = TempDir::new().unwrap();
        // Make the destination path a non-empty directory so the final rename
        // must fail, then check nothing under it was disturbed.
        let dest = tmp.path().join(ListKind::Today.file_name());
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("sentinel"), b"untouched").unwrap();

        let list = TaskList::new(ListKind::Today, vec![crate::model::Task::new("a")]);
        let err = save_list(tmp.path(), &list, today());
        assert!(err.is_err());
        assert_eq!(
            fs::read_to_string(dest.join("sentinel")).unwrap(),
            "untouched"
        );
    }
}
