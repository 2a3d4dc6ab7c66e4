use super::*;

#[test]
fn under_a_minute_is_just_now() {
    assert_eq!(relative_time(1_000, 59_000), "just now");
}

#[test]
fn minutes_render_as_min() {
    assert_eq!(relative_time(0, 5 * 60 * 1000), "5 min");
}

#[test]
fn hours_render_as_h() {
    assert_eq!(relative_time(0, 3 * 60 * 60 * 1000), "3 h");
}

#[test]
fn days_render_as_d() {
    assert_eq!(relative_time(0, 2 * 24 * 60 * 60 * 1000), "2 d");
}

#[test]
fn future_timestamps_render_as_just_now() {
    assert_eq!(relative_time(10_000, 5_000), "just now");
}

#[test]
fn now_is_zero_outside_browser() {
    assert_eq!(now_ms(), 0);
}
