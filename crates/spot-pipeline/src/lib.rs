//! # spot-pipeline
//!
//! Single-pass, stateless pipeline turning raw spot price records into a
//! fully positioned, colored, and annotated chart dataset. Re-run on every
//! change to input data or display options; each run is a pure function of
//! its inputs, so superseding runs simply replace prior output.
//!
//! ## Stages
//!
//! - `normalize` - loose records to typed, sorted points
//! - `interval` - sampling step inference from timestamp deltas
//! - `rank` - per-day price ranking and tier coloring
//! - `visibility` - past-point flagging and filtering
//! - `annotate` - axis ticks, day boundaries, "now" marker
//! - `layout` - adaptive per-bar pixel width
//! - `summary` - min/max/mean of the visible prices

pub mod annotate;
pub mod interval;
pub mod layout;
pub mod normalize;
pub mod rank;
pub mod summary;
pub mod visibility;

pub use annotate::*;
pub use interval::*;
pub use layout::*;
pub use normalize::*;
pub use rank::*;
pub use summary::*;
pub use visibility::*;

use serde::Serialize;
use spot_core::{ChartPoint, Marker, PriceFeed, PriceRecord, SummaryStats};

// ============================================================================
// OPTIONS
// ============================================================================

/// Display options supplied by the caller on every run.
///
/// `now_ms` comes from the caller too: the pipeline never reads the clock,
/// which keeps every run reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    /// Select tax-inclusive or tax-exclusive prices
    pub include_tax: bool,
    /// Scale applied to the selected price (e.g. EUR/kWh -> cents/kWh)
    pub multiplier: f64,
    /// Keep points whose interval has fully elapsed
    pub show_past: bool,
    /// Rendering surface width in pixels, if known
    pub container_width: Option<f64>,
    /// Current instant, unix milliseconds
    pub now_ms: i64,
}

impl ChartOptions {
    pub fn new(now_ms: i64) -> Self {
        Self {
            include_tax: true,
            multiplier: 1.0,
            show_past: true,
            container_width: None,
            now_ms,
        }
    }

    pub fn include_tax(mut self, include_tax: bool) -> Self {
        self.include_tax = include_tax;
        self
    }

    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn show_past(mut self, show_past: bool) -> Self {
        self.show_past = show_past;
        self
    }

    pub fn container_width(mut self, width: f64) -> Self {
        self.container_width = Some(width);
        self
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Fully annotated chart dataset for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOutput {
    /// Visible points, sorted ascending by timestamp, tiers attached
    pub points: Vec<ChartPoint>,
    /// Inferred sampling interval
    pub interval: SamplingInterval,
    /// Axis tick timestamps on even wall-clock hours
    pub axis_ticks: Vec<i64>,
    /// Day-boundary markers
    pub day_markers: Vec<Marker>,
    /// Marker at the current instant, when inside the visible range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now_marker: Option<Marker>,
    /// Per-bar pixel width, absent when the container width is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_width: Option<u32>,
    /// Min/max/mean of the visible prices, absent on an empty chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryStats>,
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Run the whole pipeline: normalize, estimate, rank, filter, annotate,
/// size. Deterministic for identical inputs.
pub fn render(records: &[PriceRecord], options: &ChartOptions) -> ChartOutput {
    let points = normalize::normalize(records, options.include_tax, options.multiplier);
    let interval = interval::estimate_interval(&points);
    let step_ms = interval.step_ms();

    let ranked = rank::rank_days(&points, interval.points_per_hour);
    let flagged = visibility::flag_past(&ranked, step_ms, options.now_ms);
    let visible = visibility::filter_visible(flagged, options.show_past, step_ms, options.now_ms);

    tracing::debug!(
        records = records.len(),
        visible = visible.len(),
        interval_minutes = interval.minutes,
        "pipeline run"
    );

    ChartOutput {
        axis_ticks: annotate::axis_ticks(&visible),
        day_markers: annotate::day_markers(&visible, step_ms),
        now_marker: annotate::now_marker(&visible, options.now_ms),
        bar_width: options
            .container_width
            .and_then(|width| layout::bar_width(width, visible.len())),
        summary: summary::summarize(&visible),
        interval,
        points: visible,
    }
}

/// Run the pipeline straight off an upstream response body, which may be a
/// bare record or an array of records.
pub fn render_feed(feed: PriceFeed, options: &ChartOptions) -> ChartOutput {
    render(&feed.into_records(), options)
}
