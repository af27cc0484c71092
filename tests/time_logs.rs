#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timl::db::time_logs::TimeLogs;
    use timl::libs::error::AppError;

    struct TimeLogTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TimeLogTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TimeLogTestContext { _temp_dir: temp_dir }
        }
    }

    fn t(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(hour, min, sec).unwrap()
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_start_uppercases_task(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("start_uppercase.db").unwrap();

        let task = logs.start("abc-1", t(9, 0, 0)).unwrap();
        assert_eq!(task, "ABC-1");

        let entry = logs.last().unwrap().unwrap();
        assert_eq!(entry.task, "ABC-1");
        assert!(entry.is_open());
        assert!(!entry.pushed);
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_start_rejects_blank_task(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("start_blank.db").unwrap();

        assert!(matches!(logs.start("", t(9, 0, 0)), Err(AppError::Validation(_))));
        assert!(matches!(logs.start("   ", t(9, 0, 0)), Err(AppError::Validation(_))));
        assert!(logs.last().unwrap().is_none());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_start_closes_previous_interval(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("start_closes.db").unwrap();

        // Scenario: start "x", then start "y" without stopping
        logs.start("x", t(9, 0, 0)).unwrap();
        logs.start("y", t(9, 30, 0)).unwrap();

        let entries = logs.fetch_since(t(0, 0, 0)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].task, "X");
        assert_eq!(entries[0].end_time, Some(t(9, 30, 0)));
        assert_eq!(entries[1].task, "Y");
        assert_eq!(entries[1].start_time, t(9, 30, 0));

        // The "x" entry's end equals the "y" entry's start; only "y" is open
        assert_eq!(entries[0].end_time, Some(entries[1].start_time));
        assert_eq!(entries.iter().filter(|e| e.is_open()).count(), 1);
        assert_eq!(logs.active_task().unwrap().as_deref(), Some("Y"));
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_restarting_same_task_opens_fresh_interval(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("restart_same.db").unwrap();

        logs.start("abc", t(9, 0, 0)).unwrap();
        logs.start("abc", t(9, 10, 0)).unwrap();

        // No merge: two separate intervals for the same task
        let entries = logs.fetch_since(t(0, 0, 0)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].end_time, Some(t(9, 10, 0)));
        assert!(entries[1].is_open());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_at_most_one_open_entry_and_it_is_the_newest(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("invariant.db").unwrap();

        logs.start("a", t(9, 0, 0)).unwrap();
        logs.start("b", t(9, 5, 0)).unwrap();
        logs.stop(t(9, 10, 0)).unwrap();
        logs.start("c", t(9, 15, 0)).unwrap();
        logs.start("a", t(9, 20, 0)).unwrap();

        let entries = logs.fetch_since(t(0, 0, 0)).unwrap();
        let open: Vec<_> = entries.iter().filter(|e| e.is_open()).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, entries.last().unwrap().id);
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_stop_is_idempotent(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("stop_idempotent.db").unwrap();

        logs.start("abc", t(9, 0, 0)).unwrap();
        logs.stop(t(9, 1, 30)).unwrap();
        // Second stop at a later time is a no-op; end_time is write-once
        logs.stop(t(10, 0, 0)).unwrap();

        let entry = logs.last().unwrap().unwrap();
        assert_eq!(entry.end_time, Some(t(9, 1, 30)));
        assert!(logs.active_task().unwrap().is_none());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_stop_without_open_interval_is_noop(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("stop_noop.db").unwrap();

        logs.stop(t(9, 0, 0)).unwrap();
        assert!(logs.last().unwrap().is_none());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_fetch_since_excludes_earlier_days(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("fetch_since.db").unwrap();

        let yesterday = t(9, 0, 0) - Duration::days(1);
        logs.start("old", yesterday).unwrap();
        logs.stop(yesterday + Duration::minutes(30)).unwrap();
        logs.start("new", t(9, 0, 0)).unwrap();

        let entries = logs.fetch_since(t(0, 0, 0)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].task, "NEW");
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_mark_pushed_excludes_from_unpushed(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("mark_pushed.db").unwrap();

        logs.start("abc", t(9, 0, 0)).unwrap();
        logs.stop(t(9, 30, 0)).unwrap();
        logs.start("xyz", t(9, 30, 0)).unwrap();
        logs.stop(t(10, 0, 0)).unwrap();

        let unpushed = logs.fetch_unpushed().unwrap();
        assert_eq!(unpushed.len(), 2);

        logs.mark_pushed(unpushed[0].id).unwrap();
        let remaining = logs.fetch_unpushed().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].task, "XYZ");
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_clear_by_task_leaves_others(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("clear_task.db").unwrap();

        logs.start("abc", t(9, 0, 0)).unwrap();
        logs.start("abc", t(9, 10, 0)).unwrap();
        logs.start("xyz", t(9, 20, 0)).unwrap();
        logs.stop(t(9, 30, 0)).unwrap();

        let deleted = logs.clear(Some("abc")).unwrap();
        assert_eq!(deleted, 2);

        let entries = logs.fetch_since(t(0, 0, 0)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].task, "XYZ");
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_clear_all(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("clear_all.db").unwrap();

        logs.start("abc", t(9, 0, 0)).unwrap();
        logs.start("xyz", t(9, 10, 0)).unwrap();
        logs.stop(t(9, 20, 0)).unwrap();

        let deleted = logs.clear(None).unwrap();
        assert_eq!(deleted, 2);
        assert!(logs.last().unwrap().is_none());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_malformed_timestamp_is_a_storage_error(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("malformed.db").unwrap();

        logs.conn
            .execute("INSERT INTO timelogs (task, start_time) VALUES ('ABC', 'not-a-timestamp')", [])
            .unwrap();

        assert!(matches!(logs.last(), Err(AppError::Storage(_))));
        assert!(matches!(logs.fetch_unpushed(), Err(AppError::Storage(_))));
        assert!(matches!(logs.fetch_since(t(0, 0, 0)), Err(AppError::Storage(_))));
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_duration_survives_sub_second_timestamps(_ctx: &mut TimeLogTestContext) {
        let mut logs = TimeLogs::new("subsecond.db").unwrap();

        let start = t(9, 0, 0) + Duration::microseconds(123_456);
        logs.start("abc", start).unwrap();
        logs.stop(start + Duration::seconds(90)).unwrap();

        let entry = logs.last().unwrap().unwrap();
        assert_eq!(entry.start_time, start);
        assert_eq!(entry.duration_seconds(t(12, 0, 0)), 90);
    }
}
