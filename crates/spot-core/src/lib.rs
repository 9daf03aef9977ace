//! # spot-core
//!
//! Core domain types for the spot price dashboard: the loose upstream
//! record shape, the strict chart point produced by the pipeline, and the
//! per-day price tier used for bar coloring.

pub mod point;
pub mod record;

pub use point::*;
pub use record::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRICE TIER
// ============================================================================

/// Per-day price rank classification used for bar coloring.
///
/// Tiers are assigned independently per calendar day: the cheapest hours of
/// a day are `Low`, the next band `Mid`, the remainder `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Low,
    Mid,
    High,
}

impl PriceTier {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Cheap",
            Self::Mid => "Moderate",
            Self::High => "Expensive",
        }
    }

    /// Fill color for rendering
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => colors::TIER_LOW,
            Self::Mid => colors::TIER_MID,
            Self::High => colors::TIER_HIGH,
        }
    }

    /// CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "tier-low",
            Self::Mid => "tier-mid",
            Self::High => "tier-high",
        }
    }

    /// All tiers
    pub fn all() -> &'static [Self] {
        &[Self::Low, Self::Mid, Self::High]
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const TIER_LOW: &str = "#22c55e";
    pub const TIER_MID: &str = "#fbbf24";
    pub const TIER_HIGH: &str = "#ef4444";
    pub const NOW_LINE: &str = "#60a5fa";
    pub const DAY_LINE: &str = "#2a2a2a";
    pub const BG_PANEL: &str = "#141414";
    pub const TEXT_PRIMARY: &str = "#fafafa";
    pub const TEXT_MUTED: &str = "#888888";
    pub const GRID: &str = "#1f1f1f";

    pub fn tier_alpha(tier: super::PriceTier, alpha: f64) -> String {
        let (r, g, b) = match tier {
            super::PriceTier::Low => (34, 197, 94),
            super::PriceTier::Mid => (251, 191, 36),
            super::PriceTier::High => (239, 68, 68),
        };
        format!("rgba({}, {}, {}, {:.2})", r, g, b, alpha)
    }
}
