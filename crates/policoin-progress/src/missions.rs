//! Groups a [`MetaProgress`] snapshot into what the mission board shows:
//! the current rung of every ladder still in progress, and every mission
//! already reached.

use policoin_models::{Category, MetaProgress, Mission};
use serde::Serialize;
use tracing::debug;

use crate::format::display_label;

/// Sub-theme keys that carry links or metadata, never a mission ladder.
pub const RESERVED_SUB_THEMES: &[&str] = &["click_here"];

/// Where a ladder currently stands. The backend moves it forward; this side
/// only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubThemeState {
    /// `index` is the first mission below 100%.
    Active { index: usize },
    AllComplete,
    Empty,
}

impl SubThemeState {
    pub fn of(missions: &[Mission]) -> Self {
        if missions.is_empty() {
            return Self::Empty;
        }
        match missions.iter().position(|m| !m.is_complete()) {
            Some(index) => Self::Active { index },
            None => Self::AllComplete,
        }
    }
}

pub fn current_mission(missions: &[Mission]) -> Option<&Mission> {
    missions.iter().find(|m| !m.is_complete())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSubTheme {
    pub name: String,
    pub label: String,
    pub tooltip: Option<String>,
    pub current: Mission,
    /// Zero-based position of `current` in the ladder.
    pub level_index: usize,
    pub total_levels: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMission {
    pub sub_theme: String,
    pub sub_theme_label: String,
    #[serde(flatten)]
    pub mission: Mission,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub label: String,
    pub has_error: bool,
    pub error: Option<String>,
    pub active_sub_themes: Vec<ActiveSubTheme>,
    pub completed_missions: Vec<CompletedMission>,
}

pub fn aggregate(progress: &MetaProgress) -> Vec<CategorySummary> {
    progress.categories.iter().map(summarize_category).collect()
}

pub fn summarize_category(category: &Category) -> CategorySummary {
    let mut summary = CategorySummary {
        category: category.name.clone(),
        label: display_label(&category.name),
        has_error: false,
        error: None,
        active_sub_themes: Vec::new(),
        completed_missions: Vec::new(),
    };

    if let Some(error) = category.error() {
        debug!(category = %category.name, error, "category reported a backend error");
        summary.has_error = true;
        summary.error = Some(error.to_string());
        return summary;
    }

    for sub_theme in &category.sub_themes {
        let missions = sub_theme.missions();

        summary.completed_missions.extend(
            missions
                .iter()
                .filter(|m| m.is_complete())
                .map(|m| CompletedMission {
                    sub_theme: sub_theme.name.clone(),
                    sub_theme_label: display_label(&sub_theme.name),
                    mission: m.clone(),
                }),
        );

        if RESERVED_SUB_THEMES.contains(&sub_theme.name.as_str()) {
            continue;
        }

        let SubThemeState::Active { index } = SubThemeState::of(missions) else {
            continue;
        };
        let Some(current) = missions.get(index) else {
            continue;
        };
        summary.active_sub_themes.push(ActiveSubTheme {
            name: sub_theme.name.clone(),
            label: display_label(&sub_theme.name),
            tooltip: sub_theme.tooltip().map(str::to_string),
            current: current.clone(),
            level_index: index,
            total_levels: missions.len(),
        });
    }

    debug!(
        category = %category.name,
        active = summary.active_sub_themes.len(),
        completed = summary.completed_missions.len(),
        "summarized category"
    );
    summary
}
