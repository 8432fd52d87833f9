use chrono::{DateTime, Local};

pub fn now_timestamp_ms() -> i64 {
    // chrono's wasmbind feature keeps this working in the browser too
    Local::now().timestamp_millis()
}

/// Wall-clock time for feed rows, e.g. "14:05:31".
pub fn epoch_ms_to_clock_string(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}
