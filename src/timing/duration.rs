use super::Seconds;

const SECONDS_PER_DAY: Seconds = 86_400.0;

/// Below this raw difference the end time is assumed to have wrapped past midnight.
/// Differences between this and zero are kept as genuine negative durations.
const ROLLOVER_THRESHOLD: Seconds = -1_000.0;

/// Elapsed time between two times of day.
///
/// A 0 on either side means the checkpoint was not recorded and yields 0.
pub fn duration(start: Seconds, end: Seconds) -> Seconds {
    if start == 0.0 || end == 0.0 {
        return 0.0;
    }

    let raw = end - start;
    if raw < ROLLOVER_THRESHOLD {
        raw + SECONDS_PER_DAY
    } else {
        raw
    }
}

/// Lift the provider's "0 means unrecorded" convention into an `Option`.
///
/// A genuinely zero elapsed time is indistinguishable from a missing one here,
/// which matches what the provider data can express.
pub fn recorded(seconds: Seconds) -> Option<Seconds> {
    if seconds == 0.0 || !seconds.is_finite() {
        None
    } else {
        Some(seconds)
    }
}
