//! Per-day price ranking and tier assignment
//!
//! Each calendar day is ranked in isolation: the cheapest stretch of the
//! day is tagged low, the next stretch mid, the rest high. There is no
//! cross-day price comparison, so a cheap hour on an expensive day still
//! shows green.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use spot_core::{ChartPoint, PriceTier};

/// Hours of the cheapest tier per day
const LOW_TIER_HOURS: u32 = 6;
/// Hours covered by the low + mid tiers per day
const MID_TIER_HOURS: u32 = 12;

/// One day's points ranked ascending by price.
///
/// Ephemeral: built per run, consumed immediately by tier assignment.
struct DayBucket {
    /// Point indices sorted ascending by price, ties in original order
    by_price: Vec<usize>,
    /// Rank count tagged low
    low_limit: usize,
    /// Rank count tagged low or mid
    mid_limit: usize,
}

impl DayBucket {
    fn build(points: &[ChartPoint], indices: Vec<usize>, points_per_hour: u32) -> Self {
        let mut by_price = indices;
        // Stable sort keeps equal prices in original order
        by_price.sort_by(|&a, &b| {
            points[a]
                .value
                .partial_cmp(&points[b].value)
                .unwrap_or(Ordering::Equal)
        });

        let count = by_price.len();
        Self {
            by_price,
            low_limit: count.min((LOW_TIER_HOURS * points_per_hour) as usize),
            mid_limit: count.min((MID_TIER_HOURS * points_per_hour) as usize),
        }
    }

    fn tier_for_rank(&self, rank: usize) -> PriceTier {
        if rank < self.low_limit {
            PriceTier::Low
        } else if rank < self.mid_limit {
            PriceTier::Mid
        } else {
            PriceTier::High
        }
    }
}

/// Attach a price tier to every point, ranking each day independently.
///
/// Point order is preserved from input.
pub fn rank_days(points: &[ChartPoint], points_per_hour: u32) -> Vec<ChartPoint> {
    let mut days: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, point) in points.iter().enumerate() {
        days.entry(point.day_key.as_str()).or_default().push(index);
    }

    let mut ranked = points.to_vec();
    for (_, indices) in days {
        let bucket = DayBucket::build(points, indices, points_per_hour);
        for (rank, &index) in bucket.by_price.iter().enumerate() {
            ranked[index].tier = Some(bucket.tier_for_rank(rank));
        }
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day_key: &str, hour: i64, value: f64) -> ChartPoint {
        ChartPoint {
            label: format!("{:02}:00", hour),
            full_label: String::new(),
            value,
            timestamp: hour * 3_600_000,
            day_key: day_key.into(),
            utc_offset_secs: 0,
            tier: None,
            is_past: false,
        }
    }

    #[test]
    fn test_hourly_day_splits_6_6_12() {
        // Prices ascend with the hour, so tiers follow chronological order
        let points: Vec<ChartPoint> = (0..24)
            .map(|h| point("2024-02-01", h, h as f64))
            .collect();
        let ranked = rank_days(&points, 1);

        let tally = |tier| ranked.iter().filter(|p| p.tier == Some(tier)).count();
        assert_eq!(tally(PriceTier::Low), 6);
        assert_eq!(tally(PriceTier::Mid), 6);
        assert_eq!(tally(PriceTier::High), 12);

        assert_eq!(ranked[0].tier, Some(PriceTier::Low));
        assert_eq!(ranked[6].tier, Some(PriceTier::Mid));
        assert_eq!(ranked[23].tier, Some(PriceTier::High));
    }

    #[test]
    fn test_cheapest_prices_get_low_tier() {
        // Descending prices: the last points of the day are the cheap ones
        let points: Vec<ChartPoint> = (0..24)
            .map(|h| point("2024-02-01", h, (24 - h) as f64))
            .collect();
        let ranked = rank_days(&points, 1);

        assert_eq!(ranked[23].tier, Some(PriceTier::Low));
        assert_eq!(ranked[0].tier, Some(PriceTier::High));
    }

    #[test]
    fn test_days_ranked_independently() {
        // Day two is uniformly pricier, but still gets its own low tier
        let mut points: Vec<ChartPoint> = (0..24)
            .map(|h| point("2024-02-01", h, h as f64))
            .collect();
        points.extend((0..24).map(|h| point("2024-02-02", 24 + h, 1000.0 + h as f64)));

        let ranked = rank_days(&points, 1);
        let day_two_low = ranked
            .iter()
            .filter(|p| p.day_key == "2024-02-02" && p.tier == Some(PriceTier::Low))
            .count();
        assert_eq!(day_two_low, 6);
    }

    #[test]
    fn test_limits_scale_with_resolution() {
        // Quarter-hour sampling: 6 hours of low tier = 24 points
        let points: Vec<ChartPoint> = (0..96)
            .map(|i| point("2024-02-01", i, i as f64))
            .collect();
        let ranked = rank_days(&points, 4);

        let low = ranked
            .iter()
            .filter(|p| p.tier == Some(PriceTier::Low))
            .count();
        assert_eq!(low, 24);
    }

    #[test]
    fn test_short_day_clamps_limits() {
        // 4 points with pointsPerHour 1: everything fits inside the low tier
        let points: Vec<ChartPoint> = (0..4)
            .map(|h| point("2024-02-01", h, h as f64))
            .collect();
        let ranked = rank_days(&points, 1);
        assert!(ranked.iter().all(|p| p.tier == Some(PriceTier::Low)));
    }

    #[test]
    fn test_input_order_preserved() {
        let points: Vec<ChartPoint> = (0..24)
            .map(|h| point("2024-02-01", h, (h % 7) as f64))
            .collect();
        let ranked = rank_days(&points, 1);
        for (before, after) in points.iter().zip(&ranked) {
            assert_eq!(before.timestamp, after.timestamp);
        }
    }
}
