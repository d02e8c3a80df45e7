use std::path::PathBuf;

use eyre::WrapErr;

#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub data_dir: PathBuf,
    /// Reject negative or non-finite point totals instead of clamping them.
    pub strict_points: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            strict_points: false,
        }
    }
}

impl ProgressConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let data_dir = std::env::var("POLICOIN_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let strict_points = match std::env::var("POLICOIN_STRICT_POINTS") {
            Ok(raw) => parse_bool(&raw).wrap_err("POLICOIN_STRICT_POINTS must be true/false/1/0")?,
            Err(_) => false,
        };

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            strict_points,
        })
    }

    pub fn points_path(&self) -> PathBuf {
        self.data_dir.join("points.json")
    }

    pub fn meta_progress_path(&self) -> PathBuf {
        self.data_dir.join("meta_progress.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("user_data.json")
    }
}

fn parse_bool(raw: &str) -> eyre::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(eyre::eyre!("invalid boolean: {other:?}")),
    }
}
