//! Summary statistics over the visible prices

use spot_core::{ChartPoint, SummaryStats};

/// Min, max, and arithmetic mean of the visible prices.
///
/// `None` on an empty set; absence is distinct from a zero price.
pub fn summarize(points: &[ChartPoint]) -> Option<SummaryStats> {
    if points.is_empty() {
        return None;
    }

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    let mut sum = 0.0;

    for point in points {
        min = min.min(point.value);
        max = max.max(point.value);
        sum += point.value;
    }

    Some(SummaryStats {
        min,
        max,
        mean: sum / points.len() as f64,
    })
}
