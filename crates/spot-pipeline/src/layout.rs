//! Adaptive bar sizing from the available container width

/// Horizontal padding the chart container reserves around the plot area
const CONTAINER_PADDING_PX: f64 = 16.0;
/// Share of each slot a bar fills, the rest is the gap between bars
const BAR_FILL_RATIO: f64 = 0.92;

/// Per-bar pixel width for `point_count` bars in a container.
///
/// `None` when the width or count is zero, so the caller falls back to the
/// chart library's default sizing. Never returns less than 1 pixel.
pub fn bar_width(container_width: f64, point_count: usize) -> Option<u32> {
    if container_width <= 0.0 || point_count == 0 {
        return None;
    }

    let per_bar = (container_width - CONTAINER_PADDING_PX) / point_count as f64;
    let width = (per_bar * BAR_FILL_RATIO).floor() as i64;
    Some(width.max(1) as u32)
}
