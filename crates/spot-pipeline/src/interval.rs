//! Sampling interval inference from consecutive timestamp deltas
//!
//! The feed does not declare its resolution, so the step is inferred from
//! the data. The median delta is used instead of the mean or first delta:
//! occasional duplicate or jittered samples must not skew the estimate.

use serde::{Deserialize, Serialize};
use spot_core::ChartPoint;

/// Fallback when fewer than 2 points or no positive delta exists
pub const DEFAULT_INTERVAL_MINUTES: u32 = 60;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Inferred sampling spacing between consecutive price points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingInterval {
    /// Representative step, whole minutes (at least 1)
    pub minutes: u32,
    /// How many points fall within one clock hour (at least 1)
    pub points_per_hour: u32,
}

impl SamplingInterval {
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes.max(1);
        Self {
            minutes,
            points_per_hour: ((60.0 / f64::from(minutes)).round() as u32).max(1),
        }
    }

    /// Step width in milliseconds
    pub fn step_ms(&self) -> i64 {
        i64::from(self.minutes) * 60_000
    }
}

impl Default for SamplingInterval {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_INTERVAL_MINUTES)
    }
}

/// Estimate the sampling interval of a timestamp-sorted point sequence.
///
/// Non-positive deltas (duplicates, out-of-order stragglers) are discarded;
/// the lower-middle median of the rest, rounded to whole minutes, wins.
pub fn estimate_interval(points: &[ChartPoint]) -> SamplingInterval {
    if points.len() < 2 {
        return SamplingInterval::default();
    }

    let mut deltas: Vec<i64> = points
        .windows(2)
        .map(|pair| pair[1].timestamp - pair[0].timestamp)
        .filter(|delta| *delta > 0)
        .collect();

    if deltas.is_empty() {
        return SamplingInterval::default();
    }

    deltas.sort_unstable();
    let median = deltas[(deltas.len() - 1) / 2];
    SamplingInterval::from_minutes((median as f64 / MS_PER_MINUTE).round() as u32)
}
