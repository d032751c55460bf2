//! Human-readable game durations.

use crate::core::{Millis, SECOND_MS};

/// Format a signed duration as `"1h 2m 3s"`, `"2m 3s"` or `"3s"`.
///
/// Leading units are shown only when positive. Units truncate toward zero,
/// so a negative duration collapses to its signed seconds remainder
/// (`-65_000` is `"-5s"`).
#[must_use]
pub fn format_duration(ms: Millis) -> String {
    let total = ms / SECOND_MS;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
