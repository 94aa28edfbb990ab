//! Status handling applied to every World Bank response before decoding.

use crate::error::WorldBankError;

/// Pass successful responses through; map 429 to
/// [`WorldBankError::RateLimited`] and any other failure status to
/// [`WorldBankError::Api`], whose message is the body or, for an empty body,
/// the status reason.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, WorldBankError> {
    if resp.status() == 429 {
        return Err(WorldBankError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            body
        };
        return Err(WorldBankError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// `Retry-After` in seconds, 60 when missing or not an integer.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
