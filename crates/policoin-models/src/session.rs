use eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// Role ids allowed into the dashboard at login.
pub const AUTHORIZED_ROLE_IDS: &[&str] = &["1", "3"];

/// The `user_data` record stored by the login flow.
///
/// Pages receive this explicitly instead of reading it from ambient storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "roles_deprecated_id")]
    pub roles: Option<String>,
    #[serde(default, rename = "first_account")]
    pub customer_id: Option<u64>,
    #[serde(default)]
    pub user_uuid: Option<String>,
    #[serde(default)]
    pub accept_terms: Option<bool>,
}

impl SessionContext {
    pub fn from_json_str(json: &str) -> eyre::Result<Self> {
        serde_json::from_str(json).wrap_err("parse user_data json")
    }

    pub fn role_ids(&self) -> impl Iterator<Item = &str> {
        self.roles
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn is_authorized(&self) -> bool {
        self.role_ids().any(|id| AUTHORIZED_ROLE_IDS.contains(&id))
    }

    pub fn needs_terms_acceptance(&self) -> bool {
        !self.accept_terms.unwrap_or(false)
    }
}
