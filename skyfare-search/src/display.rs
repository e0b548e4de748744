use chrono::{DateTime, Utc};

/// Short date shown in the results header, e.g. "Sat, Jun 1"
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%a, %b %-d").to_string()
}

/// 12-hour clock time shown on the flight card, e.g. "09:30 AM"
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%I:%M %p").to_string()
}
