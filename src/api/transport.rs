//! HTTP seam for the assessment API.
//!
//! The fetch and submit clients are written against the `Transport` trait so
//! pagination and retry behavior can be exercised offline with `MockTransport`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::config::ApiConfig;
use crate::model::SubmissionPayload;

use super::ApiError;

/// Per-request timeout for the real client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A raw HTTP reply: status code plus undecoded body.
///
/// Decoding is deferred so retry classification can look at the status
/// before committing to a body shape.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two operations the assessment API exposes.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_patients_page(&self, page: u32, limit: u32) -> Result<RawReply, ApiError>;
    async fn post_assessment(&self, payload: &SubmissionPayload) -> Result<RawReply, ApiError>;
}

/// Production transport: one reqwest client carrying the static `x-api-key`
/// credential and JSON content type on every request.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| ApiError::HttpClient(format!("invalid API key header: {e}")))?;
        headers.insert("x-api-key", key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<RawReply, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Connection(self.base_url.clone())
            } else {
                ApiError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::HttpClient(e.to_string()))?;
        Ok(RawReply { status, body })
    }
}

impl Transport for HttpTransport {
    async fn get_patients_page(&self, page: u32, limit: u32) -> Result<RawReply, ApiError> {
        let url = format!("{}/patients", self.base_url);
        self.execute(self.client.get(&url).query(&[("page", page), ("limit", limit)]))
            .await
    }

    async fn post_assessment(&self, payload: &SubmissionPayload) -> Result<RawReply, ApiError> {
        let url = format!("{}/submit-assessment", self.base_url);
        self.execute(self.client.post(&url).json(payload)).await
    }
}

/// Scripted transport for tests: replies in order from a fixed queue and
/// records the pages it was asked for.
pub struct MockTransport {
    replies: std::sync::Mutex<std::collections::VecDeque<Result<RawReply, ApiError>>>,
    pub requested_pages: std::sync::Mutex<Vec<u32>>,
}

impl MockTransport {
    pub fn new(replies: Vec<Result<RawReply, ApiError>>) -> Self {
        Self {
            replies: std::sync::Mutex::new(replies.into()),
            requested_pages: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn next_reply(&self) -> Result<RawReply, ApiError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::HttpClient("mock reply queue exhausted".into()))
            })
    }
}

impl Transport for MockTransport {
    async fn get_patients_page(&self, page: u32, _limit: u32) -> Result<RawReply, ApiError> {
        self.requested_pages.lock().unwrap().push(page);
        self.next_reply()
    }

    async fn post_assessment(&self, _payload: &SubmissionPayload) -> Result<RawReply, ApiError> {
        self.next_reply()
    }
}
