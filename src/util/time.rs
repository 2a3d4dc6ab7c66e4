//! Timestamp helpers for feed display.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current wall-clock time in milliseconds since the Unix epoch.
/// Zero outside the browser.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Coarse relative timestamp label ("just now", "5 min", "3 h", "2 d").
///
/// Both arguments are milliseconds since the Unix epoch. A `now` earlier
/// than `created_at` (clock skew) renders as "just now".
pub fn relative_time(created_at: i64, now: i64) -> String {
    let elapsed_s = (now - created_at).max(0) / 1000;
    if elapsed_s < 60 {
        return "just now".to_owned();
    }
    let minutes = elapsed_s / 60;
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} h");
    }
    format!("{} d", hours / 24)
}
