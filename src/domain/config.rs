use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.track.toggl.com/api/v8";
pub const DEFAULT_REPORTS_BASE: &str = "https://api.track.toggl.com/reports/api/v2";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    #[serde(default = "default_reports_base")]
    pub reports_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    // "local" or a fixed offset like "+02:00"
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_copy")]
    pub copy_to_clipboard: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            reports_base_url: default_reports_base(),
            user_agent: default_user_agent(),
            timezone: default_timezone(),
            request_timeout_secs: default_timeout(),
            copy_to_clipboard: default_copy(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_reports_base() -> String {
    DEFAULT_REPORTS_BASE.to_string()
}

fn default_user_agent() -> String {
    "weekly_report_script".to_string()
}

fn default_timezone() -> String {
    "local".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_copy() -> bool {
    true
}

/// Credentials resolved for a single run. `*_from_prompt` marks values that
/// were not present in the environment and still need to be persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub token_from_prompt: bool,
    pub workspace_id: Option<i64>,
    pub workspace_from_prompt: bool,
}
