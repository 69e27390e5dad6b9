//! Pagination client for the patient feed.
//!
//! One page at a time, strictly sequential. Each page gets a fixed attempt
//! budget; every attempt resolves to an `AttemptOutcome` that drives a
//! single-level retry loop with tiered backoff.

use std::time::Duration;

use tokio::time::sleep;

use crate::config::ApiConfig;
use crate::model::{PatientRecord, PatientsPage};

use super::transport::{RawReply, Transport};
use super::ApiError;

/// Wait after an HTTP 429 before retrying.
const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(5);

/// Wait after a 5xx before retrying.
const SERVER_ERROR_BACKOFF: Duration = Duration::from_secs(2);

/// Wait after a transport failure or an undecodable body before retrying.
const FAULT_BACKOFF: Duration = Duration::from_secs(3);

/// Pacing delay between successful pages.
const PAGE_PACING: Duration = Duration::from_millis(500);

/// Everything a fetch run produced.
#[derive(Debug)]
pub struct FetchOutcome {
    pub patients: Vec<PatientRecord>,
    /// Set when a page exhausted its attempt budget: every page before it
    /// was fetched, everything from it on is missing.
    pub truncated_at: Option<u32>,
}

/// How one fetch attempt resolved.
#[derive(Debug)]
enum AttemptOutcome {
    /// Decoded page body.
    Page(PatientsPage),
    /// Transient condition; back off for the given duration, then retry.
    Backoff(Duration),
    /// Non-retryable rejection (4xx other than 429).
    Fatal { status: u16, body: String },
}

/// Classify a reply from the feed. Pure so each transition is testable on
/// its own.
fn classify_reply(reply: RawReply) -> AttemptOutcome {
    match reply.status {
        429 => AttemptOutcome::Backoff(RATE_LIMIT_BACKOFF),
        s if s >= 500 => AttemptOutcome::Backoff(SERVER_ERROR_BACKOFF),
        s if !reply.is_success() => AttemptOutcome::Fatal { status: s, body: reply.body },
        _ => match serde_json::from_str::<PatientsPage>(&reply.body) {
            Ok(page) => AttemptOutcome::Page(page),
            Err(e) => {
                tracing::warn!(error = %e, "undecodable page body");
                AttemptOutcome::Backoff(FAULT_BACKOFF)
            }
        },
    }
}

/// Fetch a single page within the attempt budget.
///
/// `Ok(None)` means the budget ran out without a usable reply; the caller
/// decides what a truncated feed means.
async fn fetch_page<T: Transport>(
    transport: &T,
    page: u32,
    limit: u32,
    budget: u32,
) -> Result<Option<PatientsPage>, ApiError> {
    for attempt in 1..=budget {
        let outcome = match transport.get_patients_page(page, limit).await {
            Ok(reply) => classify_reply(reply),
            Err(e) => {
                tracing::warn!(page, attempt, error = %e, "fetch attempt failed");
                AttemptOutcome::Backoff(FAULT_BACKOFF)
            }
        };

        match outcome {
            AttemptOutcome::Page(body) => return Ok(Some(body)),
            AttemptOutcome::Fatal { status, body } => {
                return Err(ApiError::Rejected { status, body });
            }
            AttemptOutcome::Backoff(wait) => {
                tracing::info!(
                    page,
                    attempt,
                    budget,
                    wait_ms = wait.as_millis() as u64,
                    "backing off before retry"
                );
                sleep(wait).await;
            }
        }
    }
    Ok(None)
}

/// Drain the paginated feed into one record list.
///
/// Stops on an empty batch or a page without a next indicator. A page that
/// exhausts its attempt budget ends the run early with the records gathered
/// so far and `truncated_at` set, so the caller is never silently short.
pub async fn fetch_all_patients<T: Transport>(
    transport: &T,
    config: &ApiConfig,
) -> Result<FetchOutcome, ApiError> {
    let mut patients = Vec::new();
    let mut page: u32 = 1;

    loop {
        let Some(body) = fetch_page(transport, page, config.page_size, config.max_attempts).await?
        else {
            tracing::warn!(
                page,
                fetched = patients.len(),
                "attempt budget exhausted; returning a truncated feed"
            );
            return Ok(FetchOutcome { patients, truncated_at: Some(page) });
        };

        if body.data.is_empty() {
            break;
        }
        let has_next = body.pagination.is_some_and(|p| p.has_next);
        patients.extend(body.data);
        tracing::debug!(page, total = patients.len(), "page fetched");

        if !has_next {
            break;
        }
        page += 1;
        sleep(PAGE_PACING).await;
    }

    Ok(FetchOutcome { patients, truncated_at: None })
}
