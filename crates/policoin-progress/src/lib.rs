pub mod dashboard;
pub mod format;
pub mod missions;
pub mod tier;

pub use dashboard::{Dashboard, DashboardView};
pub use missions::{aggregate, summarize_category, CategorySummary, SubThemeState};
pub use tier::{tier_info, tier_info_strict, PointsError, TierInfo, TIERS};
