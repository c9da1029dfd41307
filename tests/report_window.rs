#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone, Weekday};
    use ttrack::libs::error::ReportError;
    use ttrack::libs::report::{parse_week_start, resolve_window, start_of_week, WindowSelection};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // Wednesday, January 17th 2024, at noon local time.
    fn now() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 17, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_week_start_accepts_any_casing() {
        assert_eq!(parse_week_start("Sunday").unwrap(), Weekday::Sun);
        assert_eq!(parse_week_start("monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_week_start("FRIDAY").unwrap(), Weekday::Fri);
    }

    #[test]
    fn test_parse_week_start_rejects_unknown_names() {
        let err = parse_week_start("Someday").unwrap_err();
        assert_eq!(err, ReportError::InvalidWeekday("Someday".to_string()));
    }

    #[test]
    fn test_start_of_week_honors_configured_day() {
        let wednesday = date(2024, 1, 17);
        assert_eq!(start_of_week(wednesday, Weekday::Sun), date(2024, 1, 14));
        assert_eq!(start_of_week(wednesday, Weekday::Mon), date(2024, 1, 15));
        assert_eq!(start_of_week(wednesday, Weekday::Wed), wednesday);
        // A week start later in the week than the date wraps backwards.
        assert_eq!(start_of_week(wednesday, Weekday::Thu), date(2024, 1, 11));
    }

    #[test]
    fn test_today_window() {
        let window = resolve_window(&WindowSelection::Today, now(), Weekday::Sun).unwrap();
        assert_eq!(window.start, date(2024, 1, 17).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(window.end, date(2024, 1, 17).and_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn test_current_week_window() {
        let window = resolve_window(&WindowSelection::CurrentWeek, now(), Weekday::Sun).unwrap();
        assert_eq!(window.start, date(2024, 1, 14).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(window.end, date(2024, 1, 20).and_hms_opt(23, 59, 59).unwrap());

        let monday_based = resolve_window(&WindowSelection::CurrentWeek, now(), Weekday::Mon).unwrap();
        assert_eq!(monday_based.start, date(2024, 1, 15).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(monday_based.end, date(2024, 1, 21).and_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn test_previous_week_window_is_shifted_back() {
        let current = resolve_window(&WindowSelection::CurrentWeek, now(), Weekday::Sun).unwrap();
        let previous = resolve_window(&WindowSelection::PreviousWeek, now(), Weekday::Sun).unwrap();
        assert_eq!(previous.start + chrono::Duration::days(7), current.start);
        assert_eq!(previous.end + chrono::Duration::days(7), current.end);
    }

    #[test]
    fn test_explicit_range_window() {
        let selection = WindowSelection::Range {
            from: "2024-01-01".to_string(),
            to: "2024-01-31".to_string(),
        };
        let window = resolve_window(&selection, now(), Weekday::Sun).unwrap();
        assert_eq!(window.start, date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(window.end, date(2024, 1, 31).and_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn test_unparsable_range_date_is_fatal() {
        let selection = WindowSelection::Range {
            from: "January 1st".to_string(),
            to: "2024-01-31".to_string(),
        };
        let err = resolve_window(&selection, now(), Weekday::Sun).unwrap_err();
        assert_eq!(err, ReportError::TimeParse("January 1st".to_string()));
    }
}
