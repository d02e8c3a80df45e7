//! Policoin tier lookup.
//!
//! Tiers are half-open bands `[min, next.min)`: a total equal to a tier's
//! `min` belongs to that tier. The last tier has no upper bound.

use std::fmt;

use policoin_models::TierName;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub name: TierName,
    pub min: f64,
    /// Highest whole-point total shown for this tier; `None` for the last tier.
    pub max: Option<f64>,
    pub icon: &'static str,
}

pub const TIERS: &[Tier] = &[
    Tier {
        name: TierName::Starter,
        min: 0.0,
        max: Some(4_999.0),
        icon: "/inicio.svg",
    },
    Tier {
        name: TierName::Bronze,
        min: 5_000.0,
        max: Some(14_999.0),
        icon: "/bronze.svg",
    },
    Tier {
        name: TierName::Prata,
        min: 15_000.0,
        max: Some(49_999.0),
        icon: "/prata.svg",
    },
    Tier {
        name: TierName::Ouro,
        min: 50_000.0,
        max: Some(99_999.0),
        icon: "/ouro.svg",
    },
    Tier {
        name: TierName::Diamante,
        min: 100_000.0,
        max: Some(499_999.0),
        icon: "/diamante.svg",
    },
    Tier {
        name: TierName::Uce,
        min: 500_000.0,
        max: None,
        icon: "/uce.svg",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub name: TierName,
    pub icon: &'static str,
    /// Percent of the way from this tier's `min` to the next tier's `min`.
    pub progress: f64,
    pub current: f64,
    pub next: Option<f64>,
    pub min: f64,
    pub max: Option<f64>,
    pub points_to_next: Option<f64>,
}

impl TierInfo {
    /// Shown while the points total has not been loaded yet.
    pub fn placeholder() -> Self {
        tier_info(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointsError {
    Negative(f64),
    NonFinite,
}

impl fmt::Display for PointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointsError::Negative(points) => write!(f, "point total is negative: {points}"),
            PointsError::NonFinite => write!(f, "point total is not a finite number"),
        }
    }
}

impl std::error::Error for PointsError {}

/// Index into [`TIERS`] of the band holding `points`, after clamping.
pub fn tier_index(points: f64) -> usize {
    let points = clamp_points(points);
    (0..TIERS.len())
        .find(|&index| band_contains(index, points))
        .unwrap_or(0)
}

pub fn tier_for(points: f64) -> &'static Tier {
    &TIERS[tier_index(points)]
}

/// Tier, progress and bounds for a cumulative point total.
///
/// Negative and non-finite totals are treated as `0`.
pub fn tier_info(points: f64) -> TierInfo {
    let points = clamp_points(points);
    let index = tier_index(points);
    let tier = &TIERS[index];
    let next_tier = TIERS.get(index + 1);

    let progress = match next_tier {
        Some(next) => ((points - tier.min) / (next.min - tier.min) * 100.0).min(100.0),
        None => 100.0,
    };

    TierInfo {
        name: tier.name,
        icon: tier.icon,
        progress,
        current: points,
        next: next_tier.map(|next| next.min).or(tier.max),
        min: tier.min,
        max: tier.max,
        points_to_next: next_tier.map(|next| next.min - points),
    }
}

/// Like [`tier_info`], but reports invalid totals instead of clamping them.
pub fn tier_info_strict(points: f64) -> Result<TierInfo, PointsError> {
    if !points.is_finite() {
        return Err(PointsError::NonFinite);
    }
    if points < 0.0 {
        return Err(PointsError::Negative(points));
    }
    Ok(tier_info(points))
}

fn clamp_points(points: f64) -> f64 {
    if points.is_finite() && points > 0.0 {
        points
    } else {
        0.0
    }
}

fn band_contains(index: usize, points: f64) -> bool {
    let Some(tier) = TIERS.get(index) else {
        return false;
    };
    let upper = TIERS.get(index + 1).map(|next| next.min);
    points >= tier.min && upper.map_or(true, |upper| points < upper)
}
