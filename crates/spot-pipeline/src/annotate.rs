//! Axis ticks and chart markers for the visible range
//!
//! All positions are unix timestamps in milliseconds, but tick alignment
//! and marker labels follow the wall clock of the feed's own UTC offset,
//! carried on each point since normalization.

use chrono::{DateTime, Datelike, FixedOffset};
use spot_core::{ChartPoint, Marker};

const HOUR_MS: i64 = 3_600_000;
const TICK_SPACING_HOURS: i64 = 2;

/// Tick timestamps on even wall-clock hours across the visible range.
///
/// The first visible timestamp is rounded up to the next clock hour, then
/// to the next even hour; ticks follow every 2 hours up to the last
/// visible timestamp. A non-empty range always yields at least one tick:
/// when the range is shorter than the alignment step, the single aligned
/// tick lands past the last visible timestamp and the renderer clamps it.
pub fn axis_ticks(points: &[ChartPoint]) -> Vec<i64> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let offset_ms = i64::from(first.utc_offset_secs) * 1000;
    let local_first = first.timestamp + offset_ms;
    let local_last = last.timestamp + offset_ms;

    // Ceiling division; wall-clock epoch ms is positive here
    let mut tick = ((local_first + HOUR_MS - 1) / HOUR_MS) * HOUR_MS;
    if (tick / HOUR_MS) % 2 != 0 {
        tick += HOUR_MS;
    }

    let mut ticks = Vec::new();
    while tick <= local_last {
        ticks.push(tick - offset_ms);
        tick += TICK_SPACING_HOURS * HOUR_MS;
    }

    if ticks.is_empty() {
        ticks.push(tick - offset_ms);
    }

    ticks
}

/// One marker per day transition, sitting midway between the last point of
/// the old day and the first point of the new one.
pub fn day_markers(points: &[ChartPoint], step_ms: i64) -> Vec<Marker> {
    points
        .windows(2)
        .filter(|pair| pair[1].day_key != pair[0].day_key)
        .map(|pair| {
            Marker::new(
                pair[1].timestamp - step_ms / 2,
                day_label(&pair[1]),
            )
        })
        .collect()
}

/// Marker at the current instant, present only while "now" falls inside
/// the visible range (inclusive on both ends).
pub fn now_marker(points: &[ChartPoint], now_ms: i64) -> Option<Marker> {
    let first = points.first()?;
    let last = points.last()?;

    if now_ms < first.timestamp || now_ms > last.timestamp {
        return None;
    }

    let label = local_time(now_ms, first.utc_offset_secs)
        .map(|moment| moment.format("%H:%M").to_string())
        .unwrap_or_default();
    Some(Marker::new(now_ms, label))
}

/// Short weekday + day.month of the point's day ("Fri 2.2.")
fn day_label(point: &ChartPoint) -> String {
    local_time(point.timestamp, point.utc_offset_secs)
        .map(|moment| {
            format!("{} {}.{}.", moment.format("%a"), moment.day(), moment.month())
        })
        .unwrap_or_else(|| point.day_key.clone())
}

fn local_time(timestamp_ms: i64, utc_offset_secs: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(utc_offset_secs)?;
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(hour_utc: i64, offset_secs: i32, day_key: &str) -> ChartPoint {
        ChartPoint {
            label: String::new(),
            full_label: String::new(),
            value: 0.0,
            timestamp: hour_utc * HOUR_MS,
            day_key: day_key.into(),
            utc_offset_secs: offset_secs,
            tier: None,
            is_past: false,
        }
    }

    #[test]
    fn test_ticks_land_on_even_local_hours() {
        // UTC+2: points at local hours 1..=7
        let points: Vec<ChartPoint> =
            (0..7).map(|h| point(h - 1, 7200, "2024-02-01")).collect();
        let ticks = axis_ticks(&points);

        // Local even hours 2, 4, 6 inside the range
        assert_eq!(ticks.len(), 3);
        for (i, tick) in ticks.iter().enumerate() {
            let local = tick + 7200 * 1000;
            assert_eq!(local % (2 * HOUR_MS), 0, "tick {} not on even hour", i);
        }
        assert_eq!(ticks[0] + 7200 * 1000, 2 * HOUR_MS);
    }

    #[test]
    fn test_start_on_even_hour_keeps_that_hour() {
        // Rounding up must be exact: a first point already on an even
        // clock hour gets its tick there, not an hour later
        let points = vec![point(4, 0, "1970-01-01"), point(9, 0, "1970-01-01")];
        let ticks = axis_ticks(&points);
        assert_eq!(ticks, vec![4 * HOUR_MS, 6 * HOUR_MS, 8 * HOUR_MS]);
    }

    #[test]
    fn test_odd_start_rounds_up_to_even_hour() {
        let mut first = point(1, 0, "1970-01-01");
        first.timestamp += 60_000; // 01:01
        let points = vec![first, point(8, 0, "1970-01-01")];

        let ticks = axis_ticks(&points);
        assert_eq!(ticks[0], 2 * HOUR_MS);
    }

    #[test]
    fn test_short_range_still_produces_a_tick() {
        let points = vec![point(1, 0, "1970-01-01")];
        let ticks = axis_ticks(&points);
        assert_eq!(ticks, vec![2 * HOUR_MS]);
    }

    #[test]
    fn test_no_ticks_for_empty_input() {
        assert!(axis_ticks(&[]).is_empty());
    }

    #[test]
    fn test_day_marker_position_and_count() {
        let mut points: Vec<ChartPoint> =
            (0..24).map(|h| point(h, 0, "1970-01-01")).collect();
        points.extend((24..48).map(|h| point(h, 0, "1970-01-02")));

        let markers = day_markers(&points, HOUR_MS);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position, 24 * HOUR_MS - HOUR_MS / 2);
        assert_eq!(markers[0].label, "Fri 2.1.");
    }

    #[test]
    fn test_single_day_has_no_markers() {
        let points: Vec<ChartPoint> =
            (0..24).map(|h| point(h, 0, "1970-01-01")).collect();
        assert!(day_markers(&points, HOUR_MS).is_empty());
    }

    #[test]
    fn test_now_marker_inside_range() {
        let points: Vec<ChartPoint> =
            (0..24).map(|h| point(h, 7200, "1970-01-01")).collect();

        let now = 5 * HOUR_MS + 30 * 60_000;
        let marker = now_marker(&points, now).unwrap();
        assert_eq!(marker.position, now);
        assert_eq!(marker.label, "07:30"); // local clock at UTC+2
    }

    #[test]
    fn test_now_marker_absent_outside_range() {
        let points: Vec<ChartPoint> =
            (1..5).map(|h| point(h, 0, "1970-01-01")).collect();
        assert!(now_marker(&points, 0).is_none());
        assert!(now_marker(&points, 10 * HOUR_MS).is_none());
        // Inclusive at both ends
        assert!(now_marker(&points, HOUR_MS).is_some());
        assert!(now_marker(&points, 4 * HOUR_MS).is_some());
    }
}
