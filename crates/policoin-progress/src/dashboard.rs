use policoin_models::config::ProgressConfig;
use policoin_models::session::SessionContext;
use policoin_models::{MetaProgress, PointsSummary};
use serde::Serialize;

use crate::format::format_points;
use crate::missions::{aggregate, CategorySummary};
use crate::tier::{tier_info, tier_info_strict, PointsError, TierInfo};

/// Everything the home page renders from one fetch of points and progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub tier: TierInfo,
    /// Spendable Policoins (`current_points`), if the points total was loaded.
    pub balance: Option<f64>,
    pub balance_label: Option<String>,
    pub categories: Vec<CategorySummary>,
    pub show_terms: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dashboard {
    strict_points: bool,
}

impl Dashboard {
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            strict_points: config.strict_points,
        }
    }

    pub fn strict(strict_points: bool) -> Self {
        Self { strict_points }
    }

    /// Only fails in strict mode, when the points total is negative or not finite.
    pub fn build(
        &self,
        points: Option<&PointsSummary>,
        progress: &MetaProgress,
        session: Option<&SessionContext>,
    ) -> Result<DashboardView, PointsError> {
        let tier = match points {
            Some(points) if self.strict_points => tier_info_strict(points.total_points)?,
            Some(points) => tier_info(points.total_points),
            None => TierInfo::placeholder(),
        };
        let balance = points.map(|p| p.current_points);

        Ok(DashboardView {
            tier,
            balance,
            balance_label: balance.map(format_points),
            categories: aggregate(progress),
            show_terms: session.is_some_and(SessionContext::needs_terms_acceptance),
        })
    }
}
