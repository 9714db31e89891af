use chrono::Duration;

/// `m:ss`; negative durations read as `0:00`.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let total = value.num_seconds().max(0);
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::seconds(0)), "0:00");
        assert_eq!(format_elapsed(Duration::seconds(9)), "0:09");
        assert_eq!(format_elapsed(Duration::seconds(125)), "2:05");
        assert_eq!(format_elapsed(Duration::seconds(-3)), "0:00");
    }
}
