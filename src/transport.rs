use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

/// Failures of a single bearer-authenticated JSON exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not marshal json for request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("bearer token is not a valid header value")]
    Header(#[source] reqwest::header::InvalidHeaderValue),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("non 2xx status: {status}")]
    Status { status: u16 },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to unmarshal response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

/// Send `body` as JSON to `url` with `Authorization: Bearer <token>` and decode
/// the JSON reply into `Res`.
///
/// One attempt, no retries. Every failure is logged here before it is returned.
pub async fn bearer_json_request<Req, Res>(
    http: &reqwest::Client,
    token: &str,
    url: &str,
    method: Method,
    body: &Req,
) -> Result<Res, TransportError>
where
    Req: Serialize + Debug + ?Sized,
    Res: DeserializeOwned,
{
    let payload = serde_json::to_vec(body).map_err(|e| {
        tracing::error!(url, error = %e, payload = ?body, "could not marshal json for request");
        TransportError::Encode(e)
    })?;

    let auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
        tracing::error!(url, error = %e, "bearer http request failed");
        TransportError::Header(e)
    })?;

    let resp = http
        .request(method, url)
        .header(AUTHORIZATION, auth)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(url, error = %e, "request init failed");
            TransportError::Network {
                url: url.to_string(),
                source: e,
            }
        })?;

    let status = resp.status();
    if !status.is_success() {
        let err = TransportError::Status {
            status: status.as_u16(),
        };
        tracing::error!(url, error = %err, "non 2xx response");
        return Err(err);
    }

    let bytes = resp.bytes().await.map_err(|e| {
        tracing::error!(url, error = %e, "failed to read response body");
        TransportError::Body(e)
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        let body = String::from_utf8_lossy(&bytes).into_owned();
        tracing::error!(url, error = %e, response_body = %body, "failed to unmarshal response body");
        TransportError::Decode { source: e, body }
    })
}
