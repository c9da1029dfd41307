#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ttrack::db::entries::Entries;
    use ttrack::libs::entry::{Entry, UNKNOWN_UID};
    use ttrack::libs::report::ReportWindow;

    struct EntriesTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for EntriesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            EntriesTestContext { _temp_dir: temp_dir }
        }
    }

    fn window(date: NaiveDate) -> ReportWindow {
        ReportWindow {
            start: date.and_hms_opt(0, 0, 0).unwrap(),
            end: date.and_hms_opt(23, 59, 59).unwrap(),
        }
    }

    // The repository assertions depend on whole-database state (first/last,
    // count, purge), so the whole lifecycle runs as one sequential test.
    #[test_context(EntriesTestContext)]
    #[test]
    fn test_entry_lifecycle(_ctx: &mut EntriesTestContext) {
        let mut entries = Entries::new().unwrap();
        assert_eq!(entries.count().unwrap(), 0);

        // Properties are deduplicated by exact (name, value) match.
        let mut first = Entry::new(UNKNOWN_UID, "alpha", "kickoff notes", "2024-05-01T09:00:00+00:00");
        first.add_property("task", "t1");
        first.add_property("task", "t1");
        first.add_property("task", "t2");
        first.add_property("url", "http://example.com");
        let first_uid = entries.insert(&first).unwrap();
        assert!(first_uid > 0);

        let fetched = entries.fetch_by_uid(first_uid).unwrap().unwrap();
        assert_eq!(fetched.project, "alpha");
        assert_eq!(fetched.note, "kickoff notes");
        assert_eq!(fetched.properties.len(), 3);
        assert_eq!(fetched.tasks_as_string(), "t1, t2");

        let second = Entry::new(UNKNOWN_UID, "beta", "", "2024-05-01T10:00:00+00:00");
        let second_uid = entries.insert(&second).unwrap();

        // Insertion order and timestamp order deliberately disagree here.
        let earliest = Entry::new(UNKNOWN_UID, "gamma", "", "2024-05-01T08:00:00+00:00");
        let earliest_uid = entries.insert(&earliest).unwrap();

        assert_eq!(entries.fetch_first().unwrap().unwrap().uid, earliest_uid);
        assert_eq!(entries.fetch_last().unwrap().unwrap().uid, second_uid);
        assert_eq!(entries.count().unwrap(), 3);

        // The distinct projection is ordered by timestamp, not by uid.
        let may_first = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let distinct = entries.distinct_in_window(&window(may_first)).unwrap();
        assert_eq!(
            distinct.iter().map(|e| e.uid).collect::<Vec<_>>(),
            vec![earliest_uid, first_uid, second_uid]
        );

        // One join row per property; a property-less entry yields a single
        // row with null property fields.
        let rows = entries.rows_for_uids(&[first_uid, second_uid]).unwrap();
        assert_eq!(rows.iter().filter(|r| r.uid == first_uid).count(), 3);
        let bare: Vec<_> = rows.iter().filter(|r| r.uid == second_uid).collect();
        assert_eq!(bare.len(), 1);
        assert!(bare[0].name.is_none());
        assert!(bare[0].value.is_none());

        assert_eq!(entries.fetch_day(may_first).unwrap().len(), 3);

        // Amending touches project, note and timestamp; properties survive.
        entries.update(first_uid, "alpha2", "edited", "2024-05-01T09:30:00+00:00").unwrap();
        let amended = entries.fetch_by_uid(first_uid).unwrap().unwrap();
        assert_eq!(amended.project, "alpha2");
        assert_eq!(amended.note, "edited");
        assert_eq!(amended.timestamp, "2024-05-01T09:30:00+00:00");
        assert_eq!(amended.properties.len(), 3);

        // Purging other years keeps the current set, then drops the stray.
        let stray = Entry::new(UNKNOWN_UID, "old", "", "2023-11-20T09:00:00+00:00");
        let stray_uid = entries.insert(&stray).unwrap();
        entries.purge_other_years(2024).unwrap();
        assert!(entries.fetch_by_uid(stray_uid).unwrap().is_none());
        assert_eq!(entries.count().unwrap(), 3);

        // Purge-all cascades into the property table.
        entries.purge_all().unwrap();
        assert_eq!(entries.count().unwrap(), 0);
        assert!(entries.rows_for_uids(&[first_uid]).unwrap().is_empty());
    }
}
