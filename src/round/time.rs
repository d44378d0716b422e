//! Clock display formatting.

use std::time::Duration;

/// Format a duration as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// Sub-second remainders are truncated.
#[must_use]
pub fn format_elapsed(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
