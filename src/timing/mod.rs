pub mod codec;
pub mod duration;

pub use codec::{BLANK, format_diff, format_time, parse_time};
pub use duration::{duration, recorded};

/// Seconds since midnight, or an elapsed time in seconds.
pub type Seconds = f64;
