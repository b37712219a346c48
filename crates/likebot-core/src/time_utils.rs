use chrono::{DateTime, NaiveDateTime};

/// Fallback text shown when the provider omits a timestamp field.
pub const TIMESTAMP_UNAVAILABLE: &str = "N/A";

const EXPIRY_DISPLAY_FORMAT: &str = "%d %B %Y, %I:%M %p";

/// Renders an ISO-8601 expiry string as a human-readable timestamp.
///
/// Provider payloads carry expiry values with or without a UTC offset, so
/// both shapes are accepted. A string that fails to parse is passed through
/// unchanged rather than dropped; an absent value renders as
/// [`TIMESTAMP_UNAVAILABLE`].
pub fn format_expiry_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return TIMESTAMP_UNAVAILABLE.to_string();
    };
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return with_offset.format(EXPIRY_DISPLAY_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(EXPIRY_DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}
