//! ISO-8601 duration parsing and watch-time formatting.
//!
//! Only the time designators of ISO-8601 are understood (`PT#H#M#S`), which
//! is the shape the YouTube Data API reports for `contentDetails.duration`.
//! Nothing here fails: unparseable input maps to `0` seconds and unrenderable
//! values map to [`INVALID_TIME`].

use std::sync::LazyLock;

use regex::Regex;

/// Rendered in place of a watch time that cannot be displayed.
pub const INVALID_TIME: &str = "Invalid time";

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern is valid")
});

/// Parse an ISO-8601 time duration into total seconds.
///
/// Returns `None` when the string contains no `PT` designator at all. Parts
/// that are absent, or whose digits overflow, count as zero.
pub fn parse_iso_duration(iso: &str) -> Option<u64> {
    let caps = ISO_DURATION.captures(iso)?;

    let part = |index: usize| -> u64 {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    Some(
        part(1)
            .saturating_mul(SECS_PER_HOUR)
            .saturating_add(part(2).saturating_mul(SECS_PER_MINUTE))
            .saturating_add(part(3)),
    )
}

/// Parse an ISO-8601 time duration into total seconds, `0` when unparseable.
///
/// # Examples
/// ```
/// use vidrate_models::duration::parse_duration;
/// assert_eq!(parse_duration("PT1H2M3S"), 3723);
/// assert_eq!(parse_duration("PT36M54S"), 2214);
/// assert_eq!(parse_duration("garbage"), 0);
/// ```
pub fn parse_duration(iso: &str) -> u64 {
    parse_iso_duration(iso).unwrap_or(0)
}

/// Hours, minutes and seconds of a whole second count.
fn split_seconds(whole: u64) -> (u64, u64, u64) {
    (
        whole / SECS_PER_HOUR,
        (whole % SECS_PER_HOUR) / SECS_PER_MINUTE,
        whole % SECS_PER_MINUTE,
    )
}

/// Format a second count as `[Hh ]Mm Ss`.
///
/// Zero, negative, NaN and infinite inputs render as [`INVALID_TIME`]. The
/// hour segment only appears when non-zero; no field is zero-padded.
///
/// # Examples
/// ```
/// use vidrate_models::duration::format_seconds;
/// assert_eq!(format_seconds(3723.0), "1h 2m 3s");
/// assert_eq!(format_seconds(125.0), "2m 5s");
/// assert_eq!(format_seconds(0.0), "Invalid time");
/// ```
pub fn format_seconds(total: f64) -> String {
    if !total.is_finite() || total <= 0.0 {
        return INVALID_TIME.to_string();
    }

    // Floor once so the fields always sum back to floor(total)
    let (hours, minutes, seconds) = split_seconds(total.floor() as u64);

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else {
        format!("{}m {}s", minutes, seconds)
    }
}

/// Format a second count as zero-padded `HH:MM:SS`.
pub fn format_clock(total: u64) -> String {
    let (hours, minutes, seconds) = split_seconds(total);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Render an ISO-8601 duration as `HH:MM:SS`.
///
/// `None` when the duration is absent or carries no `PT` designator.
pub fn iso_to_clock(iso: Option<&str>) -> Option<String> {
    let iso = iso.filter(|s| !s.is_empty())?;
    parse_iso_duration(iso).map(format_clock)
}
