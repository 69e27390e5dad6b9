//! Clients for the remote assessment API.
//!
//! `transport` is the HTTP seam (real reqwest client or a scripted mock),
//! `fetch` drains the paginated patient feed with per-page retry, and
//! `submit` posts the finished assessment once.

pub mod fetch;
pub mod submit;
pub mod transport;

pub use fetch::{fetch_all_patients, FetchOutcome};
pub use submit::submit_assessment;
pub use transport::{HttpTransport, RawReply, Transport};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("cannot reach the assessment API at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed response body: {0}")]
    ResponseParsing(String),
}
