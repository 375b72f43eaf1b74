use chrono::{DateTime, Datelike, Utc};

/// Full timestamp followed by its age, e.g. "2025-11-02 09:41:20 UTC (3h ago)"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let age = format_age(timestamp, &Utc::now());
    format!("{} ({})", timestamp.format("%Y-%m-%d %H:%M:%S UTC"), age)
}

/// Tiered age relative to `now`:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for ≥7 days: "Jan 15", "Dec 3, 2024"
pub fn format_age(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        format_relative(duration.num_seconds())
    } else if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        // Also covers clock skew (timestamps slightly in the future)
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_age_just_now() {
        let now = at(2025, 6, 15);
        assert_eq!(format_age(&(now - Duration::seconds(30)), &now), "just now");
        assert_eq!(format_age(&(now + Duration::seconds(5)), &now), "just now");
    }

    #[test]
    fn test_age_relative_units() {
        let now = at(2025, 6, 15);
        assert_eq!(format_age(&(now - Duration::minutes(45)), &now), "45m ago");
        assert_eq!(format_age(&(now - Duration::hours(3)), &now), "3h ago");
        assert_eq!(format_age(&(now - Duration::days(5)), &now), "5d ago");
    }

    #[test]
    fn test_age_absolute_same_year() {
        let now = at(2025, 6, 15);
        assert_eq!(format_age(&at(2025, 1, 15), &now), "Jan 15");
    }

    #[test]
    fn test_age_absolute_different_year() {
        let now = at(2025, 6, 15);
        assert_eq!(format_age(&at(2024, 12, 3), &now), "Dec 3, 2024");
    }

    #[test]
    fn test_format_timestamp_includes_date_and_age() {
        let timestamp = at(2020, 2, 29);
        let formatted = format_timestamp(&timestamp);
        assert!(formatted.starts_with("2020-02-29 12:00:00 UTC ("));
        assert!(formatted.ends_with("Feb 29, 2020)"));
    }
}
