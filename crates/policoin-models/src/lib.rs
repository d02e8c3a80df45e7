use std::path::Path;

use eyre::WrapErr;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumString};
use tracing::warn;

pub mod config;
pub mod session;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum TierName {
    #[serde(rename = "Starter")]
    #[strum(serialize = "Starter")]
    Starter = 0,
    #[serde(rename = "Bronze")]
    #[strum(serialize = "Bronze")]
    Bronze = 1,
    #[serde(rename = "Prata")]
    #[strum(serialize = "Prata")]
    Prata = 2,
    #[serde(rename = "Ouro")]
    #[strum(serialize = "Ouro")]
    Ouro = 3,
    #[serde(rename = "Diamante")]
    #[strum(serialize = "Diamante")]
    Diamante = 4,
    #[serde(rename = "UCE")]
    #[strum(serialize = "UCE")]
    Uce = 5,
}

impl TierName {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Bronze => "Bronze",
            Self::Prata => "Prata",
            Self::Ouro => "Ouro",
            Self::Diamante => "Diamante",
            Self::Uce => "UCE",
        }
    }
}

/// `{ total_points, current_points }` as returned by the customer points endpoint.
///
/// Both fields accept JSON numbers or numeric strings; `null` reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointsSummary {
    #[serde(deserialize_with = "deserialize_points")]
    pub total_points: f64,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub current_points: f64,
}

impl PointsSummary {
    pub fn from_json_str(json: &str) -> eyre::Result<Self> {
        serde_json::from_str(json).wrap_err("parse points summary json")
    }

    pub fn load_from_path(path: &Path) -> eyre::Result<Self> {
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("read points summary: {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

fn deserialize_points<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0.0);
    }
    number_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("expected a point amount, got {value}")))
}

/// One rung of a mission ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub nivel: u32,
    pub objetivo: f64,
    pub descricao: String,
    pub valor: f64,
    pub percentual: f64,
}

impl Mission {
    pub fn is_complete(&self) -> bool {
        self.percentual >= 100.0
    }

    /// Width of the progress bar, always within `0..=100`.
    pub fn bar_percent(&self) -> f64 {
        self.percentual.clamp(0.0, 100.0)
    }

    /// Lenient read of a backend mission object.
    ///
    /// `nivel`, `objetivo` and `valor` are required. `percentual` falls back to
    /// `valor / objetivo * 100` when missing, which needs a positive `objetivo`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let nivel = obj
            .get("nivel")
            .and_then(number_from_value)
            .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))?
            as u32;
        let objetivo = obj.get("objetivo").and_then(number_from_value)?;
        let valor = obj.get("valor").and_then(number_from_value)?;
        let descricao = obj
            .get("descricao")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let percentual = match obj.get("percentual").and_then(number_from_value) {
            Some(p) => p,
            None if objetivo > 0.0 => valor / objetivo * 100.0,
            None => return None,
        };

        Some(Self {
            nivel,
            objetivo,
            descricao,
            valor,
            percentual,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubThemeValue {
    Missions {
        missions: Vec<Mission>,
        tooltip: Option<String>,
    },
    /// `{ "error": ... }` reported by the backend for this ladder.
    Error(String),
    /// A bare `{ "tooltip": ... }` object with no missions.
    Tooltip(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubTheme {
    pub name: String,
    pub value: SubThemeValue,
}

impl SubTheme {
    pub fn missions(&self) -> &[Mission] {
        match &self.value {
            SubThemeValue::Missions { missions, .. } => missions,
            SubThemeValue::Error(_) | SubThemeValue::Tooltip(_) => &[],
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match &self.value {
            SubThemeValue::Missions { tooltip, .. } => tooltip.as_deref(),
            SubThemeValue::Tooltip(text) => Some(text),
            SubThemeValue::Error(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub sub_themes: Vec<SubTheme>,
}

impl Category {
    /// First backend error reported by any sub-theme of this category.
    pub fn error(&self) -> Option<&str> {
        self.sub_themes.iter().find_map(|s| match &s.value {
            SubThemeValue::Error(message) => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn sub_theme(&self, name: &str) -> Option<&SubTheme> {
        self.sub_themes.iter().find(|s| s.name == name)
    }
}

/// Snapshot of `GET /get/meta-progress/{customer_id}`.
///
/// Categories and sub-themes keep the backend's key order. Entries that do
/// not have the expected shape are dropped with a warning instead of failing
/// the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaProgress {
    pub categories: Vec<Category>,
}

impl MetaProgress {
    pub fn from_value(value: &Value) -> eyre::Result<Self> {
        let Some(root) = value.as_object() else {
            return Err(eyre::eyre!("meta progress must be a JSON object"));
        };

        let mut categories = Vec::with_capacity(root.len());
        for (category_name, sub_themes) in root {
            let Some(sub_themes) = sub_themes.as_object() else {
                warn!(category = %category_name, "skipping category that is not an object");
                continue;
            };
            categories.push(Category {
                name: category_name.clone(),
                sub_themes: parse_sub_themes(category_name, sub_themes),
            });
        }

        Ok(Self { categories })
    }

    pub fn from_json_str(json: &str) -> eyre::Result<Self> {
        let value: Value = serde_json::from_str(json).wrap_err("parse meta progress json")?;
        Self::from_value(&value)
    }

    pub fn load_from_path(path: &Path) -> eyre::Result<Self> {
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("read meta progress: {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn parse_sub_themes(category: &str, sub_themes: &Map<String, Value>) -> Vec<SubTheme> {
    sub_themes
        .iter()
        .filter_map(|(name, value)| {
            let value = parse_sub_theme_value(category, name, value)?;
            Some(SubTheme {
                name: name.clone(),
                value,
            })
        })
        .collect()
}

fn parse_sub_theme_value(category: &str, sub_theme: &str, value: &Value) -> Option<SubThemeValue> {
    match value {
        Value::Array(entries) => {
            let mut missions = Vec::with_capacity(entries.len());
            let mut tooltip = None;
            for (index, entry) in entries.iter().enumerate() {
                if let Some(text) = tooltip_text(entry) {
                    tooltip.get_or_insert_with(|| text.to_string());
                    continue;
                }
                match Mission::from_value(entry) {
                    Some(mission) => missions.push(mission),
                    None => warn!(category, sub_theme, index, "skipping malformed mission entry"),
                }
            }
            Some(SubThemeValue::Missions { missions, tooltip })
        }
        Value::Object(obj) => {
            if let Some(error) = obj.get("error") {
                return Some(SubThemeValue::Error(error_message(error)));
            }
            if let Some(text) = obj.get("tooltip").and_then(Value::as_str) {
                return Some(SubThemeValue::Tooltip(text.to_string()));
            }
            warn!(category, sub_theme, "skipping sub-theme object without missions");
            None
        }
        _ => {
            warn!(category, sub_theme, "skipping sub-theme with unexpected value");
            None
        }
    }
}

fn tooltip_text(entry: &Value) -> Option<&str> {
    entry.as_object()?.get("tooltip")?.as_str()
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Null => "unknown error".to_string(),
        other => other.to_string(),
    }
}

/// Finite number from a JSON number or a numeric string.
pub fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
