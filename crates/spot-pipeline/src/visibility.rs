//! Past-point flagging and filtering relative to the current instant
//!
//! A point counts as past once its whole interval has elapsed, so the
//! currently active interval always survives the filter.

use spot_core::ChartPoint;

/// Mark points whose interval has fully elapsed.
pub fn flag_past(points: &[ChartPoint], step_ms: i64, now_ms: i64) -> Vec<ChartPoint> {
    points
        .iter()
        .cloned()
        .map(|mut point| {
            point.is_past = point.timestamp + step_ms <= now_ms;
            point
        })
        .collect()
}

/// Drop fully elapsed points unless `show_past` is set.
///
/// Pure filter: never reorders or alters the points it keeps. With
/// `show_past` the input passes through unchanged.
pub fn filter_visible(
    points: Vec<ChartPoint>,
    show_past: bool,
    step_ms: i64,
    now_ms: i64,
) -> Vec<ChartPoint> {
    if show_past {
        return points;
    }

    points
        .into_iter()
        .filter(|point| point.timestamp + step_ms > now_ms)
        .collect()
}
