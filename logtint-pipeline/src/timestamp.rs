use chrono::{Local, NaiveDateTime, TimeZone, Utc};

/// header timestamp layout, UTC on the wire
pub const TIME_LAYOUT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// convert a header timestamp from UTC to the process's local timezone,
/// keeping the layout
///
/// An unparseable timestamp comes back wrapped in `XX` markers so the
/// anomaly stays visible in the output instead of failing the line.
pub fn into_local(text: &str) -> String {
    match NaiveDateTime::parse_from_str(text, TIME_LAYOUT) {
        Ok(naive) => Utc
            .from_utc_datetime(&naive)
            .with_timezone(&Local)
            .format(TIME_LAYOUT)
            .to_string(),
        Err(err) => {
            log::debug!("unparseable header timestamp {text:?}: {err}");
            format!("XX{text}XX")
        }
    }
}
