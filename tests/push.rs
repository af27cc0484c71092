#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use timl::api::WorklogApi;
    use timl::commands::push::push_unpushed;
    use timl::db::time_logs::TimeLogs;
    use timl::libs::error::AppError;

    struct PushTestContext {
        _temp_dir: TempDir,
    }

    impl AsyncTestContext for PushTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            PushTestContext { _temp_dir: temp_dir }
        }
    }

    /// Simulated worklog backend recording submissions and failing on demand.
    struct MockApi {
        fail_tasks: HashSet<String>,
        submissions: RefCell<Vec<(String, String, i64)>>,
    }

    impl MockApi {
        fn new() -> Self {
            MockApi {
                fail_tasks: HashSet::new(),
                submissions: RefCell::new(Vec::new()),
            }
        }

        fn failing_on(task: &str) -> Self {
            let mut api = Self::new();
            api.fail_tasks.insert(task.to_string());
            api
        }
    }

    impl WorklogApi for MockApi {
        async fn submit_worklog(&self, task: &str, started: &str, seconds: i64) -> Result<(), AppError> {
            if self.fail_tasks.contains(task) {
                return Err(AppError::Remote {
                    status: 400,
                    message: "Issue does not exist".to_string(),
                });
            }
            self.submissions.borrow_mut().push((task.to_string(), started.to_string(), seconds));
            Ok(())
        }
    }

    fn t(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(hour, min, sec).unwrap()
    }

    #[test_context(PushTestContext)]
    #[tokio::test]
    async fn test_push_rounds_duration_up_to_minute(_ctx: &mut PushTestContext) {
        let mut logs = TimeLogs::new("push_round.db").unwrap();

        // Scenario: one unsynced entry of exactly 45 seconds
        logs.start("abc", t(9, 0, 0)).unwrap();
        logs.stop(t(9, 0, 45)).unwrap();

        let api = MockApi::new();
        push_unpushed(&mut logs, &api, t(10, 0, 0)).await.unwrap();

        let submissions = api.submissions.borrow();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].0, "ABC");
        assert_eq!(submissions[0].1, "2024-01-15T09:00:00.000+0000");
        assert_eq!(submissions[0].2, 60);

        // Acceptance flips the pushed flag and excludes the entry from
        // subsequent unpushed selections
        drop(submissions);
        assert!(logs.fetch_unpushed().unwrap().is_empty());
    }

    #[test_context(PushTestContext)]
    #[tokio::test]
    async fn test_push_closes_open_interval_first(_ctx: &mut PushTestContext) {
        let mut logs = TimeLogs::new("push_stops.db").unwrap();

        logs.start("abc", t(9, 0, 0)).unwrap();

        let api = MockApi::new();
        push_unpushed(&mut logs, &api, t(9, 30, 0)).await.unwrap();

        assert!(logs.active_task().unwrap().is_none());
        let submissions = api.submissions.borrow();
        assert_eq!(submissions[0].2, 1800);
    }

    #[test_context(PushTestContext)]
    #[tokio::test]
    async fn test_push_failure_leaves_row_and_continues(_ctx: &mut PushTestContext) {
        let mut logs = TimeLogs::new("push_failure.db").unwrap();

        logs.start("bad", t(9, 0, 0)).unwrap();
        logs.start("good", t(9, 10, 0)).unwrap();
        logs.stop(t(9, 20, 0)).unwrap();

        let api = MockApi::failing_on("BAD");
        push_unpushed(&mut logs, &api, t(10, 0, 0)).await.unwrap();

        // The failed row stays unpushed, the following row was still pushed
        let remaining = logs.fetch_unpushed().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].task, "BAD");
        assert!(!remaining[0].pushed);

        let submissions = api.submissions.borrow();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].0, "GOOD");
    }

    #[test_context(PushTestContext)]
    #[tokio::test]
    async fn test_push_with_nothing_to_push(_ctx: &mut PushTestContext) {
        let mut logs = TimeLogs::new("push_empty.db").unwrap();

        let api = MockApi::new();
        push_unpushed(&mut logs, &api, t(10, 0, 0)).await.unwrap();

        assert!(api.submissions.borrow().is_empty());
    }

    #[test_context(PushTestContext)]
    #[tokio::test]
    async fn test_push_retries_failed_rows_on_next_invocation(_ctx: &mut PushTestContext) {
        let mut logs = TimeLogs::new("push_retry.db").unwrap();

        logs.start("abc", t(9, 0, 0)).unwrap();
        logs.stop(t(9, 5, 0)).unwrap();

        let failing = MockApi::failing_on("ABC");
        push_unpushed(&mut logs, &failing, t(10, 0, 0)).await.unwrap();
        assert_eq!(logs.fetch_unpushed().unwrap().len(), 1);

        let accepting = MockApi::new();
        push_unpushed(&mut logs, &accepting, t(10, 5, 0)).await.unwrap();
        assert!(logs.fetch_unpushed().unwrap().is_empty());
        assert_eq!(accepting.submissions.borrow().len(), 1);
    }
}
