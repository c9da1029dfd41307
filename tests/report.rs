#[cfg(test)]
mod tests {
    use chrono::{Local, Weekday};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ttrack::db::entries::Entries;
    use ttrack::libs::entry::{Entry, UNKNOWN_UID};
    use ttrack::libs::error::ReportError;
    use ttrack::libs::report::{generate, resolve_window, ReportConfig, ReportWindow, WindowSelection};

    struct ReportTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ReportTestContext { _temp_dir: temp_dir }
        }
    }

    fn insert(entries: &mut Entries, project: &str, timestamp: &str, tasks: &[&str]) -> i64 {
        let mut entry = Entry::new(UNKNOWN_UID, project, "", timestamp);
        for task in tasks {
            entry.add_property("task", task);
        }
        entries.insert(&entry).unwrap()
    }

    fn day_range(from: &str, to: &str) -> ReportWindow {
        let selection = WindowSelection::Range {
            from: from.to_string(),
            to: to.to_string(),
        };
        resolve_window(&selection, Local::now(), Weekday::Sun).unwrap()
    }

    fn config(round_to_minutes: i64) -> ReportConfig {
        ReportConfig {
            round_to_minutes,
            week_start: Weekday::Sun,
        }
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_full_pipeline_for_a_tracked_morning(_ctx: &mut ReportTestContext) {
        let mut entries = Entries::new().unwrap();
        insert(&mut entries, "***hello", "2024-01-15T08:00:00+00:00", &[]);
        insert(&mut entries, "proj1", "2024-01-15T08:30:00+00:00", &["task1"]);
        insert(&mut entries, "proj1", "2024-01-15T09:45:00+00:00", &["task2"]);
        insert(&mut entries, "***break", "2024-01-15T10:00:00+00:00", &[]);
        insert(&mut entries, "proj1", "2024-01-15T10:15:00+00:00", &["task1"]);

        let report = generate(&mut entries, &config(15), day_range("2024-01-15", "2024-01-15")).unwrap();

        // Two hours of work, one 15-minute break.
        assert_eq!(report.totals.work_seconds, 7200);
        assert_eq!(report.totals.break_seconds, 900);

        assert_eq!(report.by_entry.len(), 4);
        assert_eq!(report.by_entry.iter().map(|v| v.seconds).collect::<Vec<_>>(), vec![1800, 4500, 900, 900]);

        assert_eq!(report.by_project.len(), 2);
        assert_eq!(report.by_project[0].project, "***break");
        assert_eq!(report.by_project[1].project, "proj1");
        assert_eq!(report.by_project[1].seconds, 7200);

        assert_eq!(report.by_task.len(), 2);
        assert_eq!(report.by_task[0].task, "task1");
        assert_eq!(report.by_task[0].seconds, 2700);
        assert_eq!(report.by_task[1].task, "task2");
        assert_eq!(report.by_task[1].seconds, 4500);

        assert_eq!(report.by_day.len(), 2);
        assert_eq!(report.by_day[1].project, "proj1");
        assert_eq!(report.by_day[1].tasks, "task1, task2");
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_empty_window_is_an_error(_ctx: &mut ReportTestContext) {
        let mut entries = Entries::new().unwrap();
        let err = generate(&mut entries, &config(15), day_range("1999-01-01", "1999-01-07")).unwrap_err();
        assert_eq!(err.downcast_ref::<ReportError>(), Some(&ReportError::EmptyWindow));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_malformed_stored_timestamp_aborts_the_report(_ctx: &mut ReportTestContext) {
        let mut entries = Entries::new().unwrap();
        insert(&mut entries, "alpha", "2031-06-01T09:00:00+00:00", &["t"]);
        // Sorts inside the window but does not parse as an instant.
        insert(&mut entries, "beta", "2031-06-01T12:00:00junk", &[]);

        let err = generate(&mut entries, &config(15), day_range("2031-06-01", "2031-06-01")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ReportError>(),
            Some(&ReportError::TimeParse("2031-06-01T12:00:00junk".to_string()))
        );
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_no_rounding_keeps_raw_durations(_ctx: &mut ReportTestContext) {
        let mut entries = Entries::new().unwrap();
        insert(&mut entries, "***hello", "2025-03-10T09:00:00+00:00", &[]);
        insert(&mut entries, "gamma", "2025-03-10T09:07:00+00:00", &["g"]);

        let report = generate(&mut entries, &config(0), day_range("2025-03-10", "2025-03-10")).unwrap();
        assert_eq!(report.totals.work_seconds, 420);

        let rounded = generate(&mut entries, &config(15), day_range("2025-03-10", "2025-03-10")).unwrap();
        assert_eq!(rounded.totals.work_seconds, 0);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_current_week_window_includes_today(_ctx: &mut ReportTestContext) {
        let mut entries = Entries::new().unwrap();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        insert(&mut entries, "omega", &format!("{}T10:00:00+00:00", today), &["w"]);

        let window = resolve_window(&WindowSelection::CurrentWeek, Local::now(), Weekday::Sun).unwrap();
        let report = generate(&mut entries, &config(0), window).unwrap();
        assert!(report.by_project.iter().any(|v| v.project == "omega"));
    }
}
