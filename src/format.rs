//! Display formatting for durations and progress.

/// Formats seconds as `HH:MM:SS`. Hours are not capped at 99.
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats an allocated duration as rounded minutes: `45m` or `1h 05m`.
pub fn format_minutes(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as u64;
    if minutes >= 60 {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m")
    }
}

/// Label for the session-length selector: `1 hour`, `1.5 hours`, `2 hours`.
pub fn hours_label(hours: f64) -> String {
    if hours == 1.0 {
        "1 hour".to_string()
    } else {
        format!("{hours} hours")
    }
}

/// Elapsed share of `total` as a percentage in `[0, 100]`.
///
/// Returns 0 when `total` is 0.
pub fn progress_percent(total: u64, remaining: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let elapsed = total.saturating_sub(remaining) as f64;
    (elapsed / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(59), "00:00:59");
        assert_eq!(format_clock(3600), "01:00:00");
        assert_eq!(format_clock(5025), "01:23:45");
        assert_eq!(format_clock(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(29), "0m");
        assert_eq!(format_minutes(30), "1m");
        assert_eq!(format_minutes(45 * 60), "45m");
        assert_eq!(format_minutes(3600), "1h 00m");
        assert_eq!(format_minutes(90 * 60), "1h 30m");
        assert_eq!(format_minutes(923), "15m");
        // 59.5 minutes rounds up into the hour form.
        assert_eq!(format_minutes(3570), "1h 00m");
    }

    #[test]
    fn test_hours_label() {
        assert_eq!(hours_label(1.0), "1 hour");
        assert_eq!(hours_label(2.0), "2 hours");
        assert_eq!(hours_label(1.5), "1.5 hours");
        assert_eq!(hours_label(0.5), "0.5 hours");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(100, 100), 0.0);
        assert_eq!(progress_percent(100, 25), 75.0);
        assert_eq!(progress_percent(100, 0), 100.0);
        // Remaining larger than total clamps at zero progress.
        assert_eq!(progress_percent(100, 150), 0.0);
    }
}
