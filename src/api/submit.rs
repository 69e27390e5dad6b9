//! Submission client: one POST, no retry.

use crate::model::SubmissionPayload;

use super::transport::Transport;
use super::ApiError;

/// Submit the finished assessment and return the API's result object.
///
/// Failures are reported to the caller, never retried: the assessment is
/// accepted exactly once or not at all.
pub async fn submit_assessment<T: Transport>(
    transport: &T,
    payload: &SubmissionPayload,
) -> Result<serde_json::Value, ApiError> {
    let reply = transport.post_assessment(payload).await?;
    if !reply.is_success() {
        return Err(ApiError::Rejected { status: reply.status, body: reply.body });
    }
    serde_json::from_str(&reply.body).map_err(|e| ApiError::ResponseParsing(e.to_string()))
}
