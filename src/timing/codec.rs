use super::Seconds;

/// Clock value the provider sends for a checkpoint that was never crossed.
pub const ZERO_SENTINEL: &str = "00:00:00";

/// Placeholder rendered instead of a zero diff.
pub const BLANK: &str = "";

/// Parse a provider clock string ("HH:MM:SS") plus its decile digit into seconds.
///
/// Hours are not capped at 23. Empty strings and the zero sentinel yield 0, and
/// any component that is not numeric counts as 0.
pub fn parse_time(time: &str, decile: &str) -> Seconds {
    let time = time.trim();
    if time.is_empty() || time == ZERO_SENTINEL {
        return 0.0;
    }

    let mut parts = time.split(':').map(parse_component);
    let hours = parts.next().unwrap_or(0.0);
    let minutes = parts.next().unwrap_or(0.0);
    let seconds = parts.next().unwrap_or(0.0);

    hours * 3600.0 + minutes * 60.0 + seconds + parse_component(decile) / 10.0
}

fn parse_component(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Render seconds as `H:MM:SS.d`, `M:SS.d` or `S.d`, dropping empty leading units.
pub fn format_time(seconds: Seconds) -> String {
    if seconds.is_nan() || seconds == 0.0 {
        return "0.0".to_string();
    }
    if seconds < 0.0 {
        return format!("-{}", format_time(-seconds));
    }

    // Round once on tenths so 59.96 carries into the minute instead of printing 60.0
    let tenths = (seconds * 10.0).round() as u64;
    let hours = tenths / 36_000;
    let minutes = (tenths % 36_000) / 600;
    let secs = (tenths % 600) / 10;
    let decile = tenths % 10;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}.{decile}")
    } else if minutes > 0 {
        format!("{minutes}:{secs:02}.{decile}")
    } else {
        format!("{secs}.{decile}")
    }
}

/// Signed gap to a leader: blank when there is no gap, `+`/`-` otherwise.
pub fn format_diff(delta: Seconds) -> String {
    if delta == 0.0 {
        return BLANK.to_string();
    }
    let sign = if delta > 0.0 { '+' } else { '-' };
    format!("{sign}{}", format_time(delta.abs()))
}

/// Provider clock string with its decile appended, or blank when unrecorded.
pub fn format_clock(time: &str, decile: &str) -> String {
    if parse_time(time, decile) == 0.0 {
        return BLANK.to_string();
    }
    let decile = decile.trim();
    if decile.is_empty() {
        format!("{}.0", time.trim())
    } else {
        format!("{}.{}", time.trim(), decile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sentinel_and_empty_parse_to_zero() {
        assert_eq!(parse_time("00:00:00", "0"), 0.0);
        assert_eq!(parse_time("", "5"), 0.0);
        assert_eq!(parse_time("   ", "5"), 0.0);
    }

    #[test]
    fn test_parse_full_clock() {
        assert_eq!(parse_time("01:02:03", "5"), 3723.5);
        assert_eq!(parse_time("25:00:00", "0"), 90_000.0);
    }

    #[test]
    fn test_malformed_components_count_as_zero() {
        assert_eq!(parse_time("xx:01:10", "?"), 70.0);
        assert_eq!(parse_time("00:02:ab", "3"), 120.3);
        assert_eq!(parse_time("00:00:10", ""), 10.0);
    }

    #[test]
    fn test_format_zero_and_nan() {
        assert_eq!(format_time(0.0), "0.0");
        assert_eq!(format_time(f64::NAN), "0.0");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_time(7.25), "7.3");
        assert_eq!(format_time(65.3), "1:05.3");
        assert_eq!(format_time(3665.0), "1:01:05.0");
        assert_eq!(format_time(59.96), "1:00.0");
    }

    #[test]
    fn test_parse_then_format_keeps_minutes_and_seconds() {
        let seconds = parse_time("00:03:07", "0");
        assert_eq!(format_time(seconds), "3:07.0");
    }

    #[test]
    fn test_format_diff() {
        assert_eq!(format_diff(0.0), BLANK);
        assert_eq!(format_diff(5.2), "+5.2");
        assert_eq!(format_diff(-61.0), "-1:01.0");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock("10:15:02", "4"), "10:15:02.4");
        assert_eq!(format_clock("00:00:00", "0"), BLANK);
        assert_eq!(format_clock("10:15:02", ""), "10:15:02.0");
    }
}
