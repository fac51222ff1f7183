//! Timestamp Display
//!
//! `created_at` arrives as an ISO-8601 string; cards show it as
//! "January 5, 2026". Anything unparseable is shown as-is.

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Format the date part of an ISO-8601 timestamp for display.
pub fn format_date(iso: &str) -> String {
    let date_part = iso.split(['T', ' ']).next().unwrap_or(iso);
    let mut parts = date_part.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_string();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return iso.to_string();
    };
    match month.checked_sub(1).and_then(|m| MONTHS.get(m)) {
        Some(name) => format!("{name} {day}, {year}"),
        None => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_full_timestamp() {
        assert_eq!(format_date("2026-01-05T10:42:00.123Z"), "January 5, 2026");
    }

    #[test]
    fn test_formats_plain_date() {
        assert_eq!(format_date("2025-12-31"), "December 31, 2025");
    }

    #[test]
    fn test_garbage_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2026-13-05"), "2026-13-05");
    }
}
