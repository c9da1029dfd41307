#[cfg(test)]
mod tests {
    use ttrack::libs::error::ReportError;
    use ttrack::libs::intervals::{derive_durations, DistinctEvent};

    fn event(uid: i64, project: &str, timestamp: &str) -> DistinctEvent {
        DistinctEvent {
            uid,
            project: project.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_single_event_anchors_to_midnight() {
        let events = vec![event(1, "alpha", "2024-01-15T08:30:00+00:00")];
        let durations = derive_durations(&events).unwrap();
        assert_eq!(durations[&1].seconds, 8 * 3600 + 1800);
    }

    #[test]
    fn test_gaps_between_consecutive_events() {
        let events = vec![
            event(1, "***hello", "2024-01-15T08:00:00+00:00"),
            event(2, "alpha", "2024-01-15T08:30:00+00:00"),
            event(3, "alpha", "2024-01-15T09:45:00+00:00"),
        ];
        let durations = derive_durations(&events).unwrap();
        assert_eq!(durations[&1].seconds, 8 * 3600);
        assert_eq!(durations[&2].seconds, 1800);
        assert_eq!(durations[&3].seconds, 4500);
    }

    #[test]
    fn test_day_marker_anchors_mid_window() {
        // The second day's marker anchors to its own midnight even though
        // it is not the first element of the window.
        let events = vec![
            event(1, "alpha", "2024-01-15T09:00:00+00:00"),
            event(2, "***hello", "2024-01-16T08:00:00+00:00"),
            event(3, "beta", "2024-01-16T08:45:00+00:00"),
        ];
        let durations = derive_durations(&events).unwrap();
        assert_eq!(durations[&1].seconds, 9 * 3600);
        assert_eq!(durations[&2].seconds, 8 * 3600);
        assert_eq!(durations[&3].seconds, 2700);
    }

    #[test]
    fn test_marker_detection_is_case_insensitive() {
        let events = vec![
            event(1, "alpha", "2024-01-15T06:00:00+00:00"),
            event(2, "***HELLO", "2024-01-15T07:00:00+00:00"),
        ];
        let durations = derive_durations(&events).unwrap();
        assert_eq!(durations[&2].seconds, 7 * 3600);
    }

    #[test]
    fn test_durations_sum_to_span_from_midnight() {
        // For a same-day sequence the anchor term plus the gaps equals the
        // span from local midnight to the last event.
        let events = vec![
            event(1, "alpha", "2024-01-15T08:15:00+00:00"),
            event(2, "beta", "2024-01-15T09:00:00+00:00"),
            event(3, "gamma", "2024-01-15T10:30:00+00:00"),
        ];
        let durations = derive_durations(&events).unwrap();
        let total: i64 = durations.values().map(|d| d.seconds).sum();
        assert_eq!(total, 10 * 3600 + 1800);
    }

    #[test]
    fn test_offsets_are_respected() {
        // 08:30 at +03:00 is 08:30 local; the midnight anchor follows the
        // stored offset, not the machine timezone.
        let events = vec![event(1, "alpha", "2024-06-01T08:30:00+03:00")];
        let durations = derive_durations(&events).unwrap();
        assert_eq!(durations[&1].seconds, 8 * 3600 + 1800);
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let events = vec![
            event(1, "alpha", "2024-01-15T08:00:00+00:00"),
            event(2, "beta", "not-a-timestamp"),
        ];
        let err = derive_durations(&events).unwrap_err();
        assert_eq!(err, ReportError::TimeParse("not-a-timestamp".to_string()));
    }
}
