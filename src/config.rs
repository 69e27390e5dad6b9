//! Runtime configuration.
//!
//! No CLI flags and no config file: a run is a single invocation configured
//! by two environment variables with compiled-in defaults. The config object
//! is passed explicitly into the client components at construction.

use std::env;

/// Application-level constants
pub const APP_NAME: &str = "patient-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default assessment API endpoint.
const DEFAULT_BASE_URL: &str = "https://assessment.ksensetech.com/api";

/// Static assessment credential; override with `TRIAGE_API_KEY`.
const DEFAULT_API_KEY: &str = "ak_0be2a7063fa64df3a958e38bd676172b54ca1f66d0c01b60";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Everything the API clients need: endpoint, credential, paging and retry
/// parameters.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    /// Records requested per page.
    pub page_size: u32,
    /// Fetch attempts allowed per page before giving up on the feed.
    pub max_attempts: u32,
}

impl ApiConfig {
    /// Build from `TRIAGE_API_URL` / `TRIAGE_API_KEY`, falling back to the
    /// compiled-in assessment defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("TRIAGE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key: env::var("TRIAGE_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            page_size: 20,
            max_attempts: 5,
        }
    }
}
