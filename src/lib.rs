pub mod aggregate;
pub mod api;
pub mod config;
pub mod model;
pub mod scoring;

use api::{fetch_all_patients, submit_assessment, ApiError, HttpTransport};
use config::ApiConfig;

/// One full assessment run: drain the feed, classify, submit.
///
/// Parse problems never surface here; they degrade to zero contributions
/// and data-quality flags inside scoring. An error from this function is a
/// network-level failure: an unreachable API, a non-retryable rejection, or
/// a refused submission.
pub async fn run() -> Result<(), ApiError> {
    let config = ApiConfig::from_env();
    let transport = HttpTransport::new(&config)?;

    tracing::info!(base_url = %config.base_url, "fetching patients");
    let outcome = fetch_all_patients(&transport, &config).await?;
    tracing::info!(
        count = outcome.patients.len(),
        truncated = outcome.truncated_at.is_some(),
        "fetch complete"
    );

    let payload = aggregate::aggregate(&outcome.patients);
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => tracing::info!("submission payload:\n{json}"),
        Err(e) => tracing::warn!(error = %e, "could not render payload for logging"),
    }
    tracing::info!(
        high_risk = payload.high_risk_patients.len(),
        fever = payload.fever_patients.len(),
        data_quality = payload.data_quality_issues.len(),
        "assessment built"
    );

    let result = submit_assessment(&transport, &payload).await?;
    tracing::info!(result = %result, "assessment submitted");
    Ok(())
}
