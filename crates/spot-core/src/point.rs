//! Chart-ready points, markers, and summary statistics

use crate::PriceTier;
use serde::{Deserialize, Serialize};

/// Fully shaped chart point derived from a valid [`PriceRecord`].
///
/// Points stay sorted ascending by timestamp throughout the pipeline.
///
/// [`PriceRecord`]: crate::PriceRecord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Short axis label, 24-hour clock ("13:00")
    pub label: String,
    /// Tooltip label: weekday + day.month + time ("Thu 1.2. 13:00")
    pub full_label: String,
    /// Selected price after the caller's scale multiplier
    pub value: f64,
    /// Unix timestamp in milliseconds (interval start)
    pub timestamp: i64,
    /// Calendar date in the timestamp's own offset ("2024-02-01"),
    /// groups intraday points for ranking
    pub day_key: String,
    /// UTC offset of the source timestamp, in seconds
    pub utc_offset_secs: i32,
    /// Per-day price tier, attached by the ranker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<PriceTier>,
    /// Has this point's interval fully elapsed relative to "now"?
    #[serde(default)]
    pub is_past: bool,
}

impl ChartPoint {
    /// Fill color for rendering (muted gray until ranked)
    pub fn fill_color(&self) -> &'static str {
        self.tier
            .map_or(crate::colors::TEXT_MUTED, |tier| tier.color())
    }
}

/// Vertical chart marker: a day boundary or the current time.
///
/// Markers are recomputed on every pipeline run; none persist between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Horizontal position as a unix timestamp in milliseconds
    pub position: i64,
    pub label: String,
}

impl Marker {
    pub fn new(position: i64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

/// Summary of the visible prices, shown alongside the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
