use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::like_request::LikeRequest;

/// Sentinel status for failures with no real HTTP status to report, such as
/// a 2xx response whose body is not valid JSON or a connection-level error.
pub const STATUS_MALFORMED_RESPONSE: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transport-level outcome of one like dispatch.
pub enum LikeTransportResult {
    /// 2xx with a JSON body; classification decides what the body means.
    Ok(Value),
    /// HTTP 404: the provider does not know the player.
    NotFoundStatus,
    /// Any other non-2xx status, or a response that could not be decoded.
    HttpError { status: u16, message: String },
    /// The bounded wait elapsed before a response arrived.
    TimedOut,
}

/// Client for the like provider, sharing one pooled connection across all
/// in-flight requests.
///
/// Exactly one outbound call is issued per invocation; there is no retry.
/// The timeout configured at construction bounds every call and aborts the
/// in-flight request when it elapses.
#[derive(Clone)]
pub struct LikeApiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl LikeApiClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        request_timeout_ms: u64,
    ) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("likebot"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(request_timeout_ms.max(1)))
            .build()
            .context("failed to create like api client")?;

        let api_base: String = api_base.into();
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Issues the single bounded like call for a normalized request.
    ///
    /// Every transport failure folds into [`LikeTransportResult`]; this
    /// method never surfaces an error to the pipeline.
    pub async fn send_like(&self, request: &LikeRequest) -> LikeTransportResult {
        let url = format!(
            "{}/{}/{}",
            self.api_base, request.backend_server, request.uid
        );
        let response = match self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) if error.is_timeout() => return LikeTransportResult::TimedOut,
            Err(error) => {
                return LikeTransportResult::HttpError {
                    status: STATUS_MALFORMED_RESPONSE,
                    message: format!("request failed: {error}"),
                }
            }
        };

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return LikeTransportResult::NotFoundStatus;
        }
        if !status.is_success() {
            return LikeTransportResult::HttpError {
                status: status.as_u16(),
                message: format!("server returned: {}", status.as_u16()),
            };
        }

        match response.json::<Value>().await {
            Ok(body) => LikeTransportResult::Ok(body),
            Err(error) if error.is_timeout() => LikeTransportResult::TimedOut,
            Err(error) => LikeTransportResult::HttpError {
                status: STATUS_MALFORMED_RESPONSE,
                message: format!("malformed response body: {error}"),
            },
        }
    }
}
