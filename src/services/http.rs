//! Shared request helpers for the identity provider and the member API

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{OtfError, Result};

/// Content type expected by the identity provider
const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// POST a JSON body to the identity provider with the given `X-Amz-Target`.
///
/// Every non-2xx response is an authentication failure.
pub(crate) fn identity_post<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    target: &str,
    body: &Value,
) -> Result<T> {
    tracing::debug!(url, amz_target = target, "identity provider request");

    let response = http
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)
        .header("X-Amz-Target", target)
        .body(body.to_string())
        .send()?;

    let status = response.status();
    let text = response.text()?;
    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            amz_target = target,
            "identity provider rejected request"
        );
        return Err(OtfError::Authentication {
            status: status.as_u16(),
            body: text,
        });
    }

    parse_json(&text, target)
}

/// GET a member API resource with the identity token in `Authorization`.
pub(crate) fn authorized_get<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    id_token: &str,
    query: &[(&str, &str)],
) -> Result<T> {
    tracing::debug!(url, "member api request");

    let response = http
        .get(url)
        .header(reqwest::header::AUTHORIZATION, id_token)
        .query(query)
        .send()?;

    let text = check_response(response)?;
    parse_json(&text, url)
}

/// Check response status and return the body if successful.
fn check_response(response: Response) -> Result<String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.text()?);
    }

    let body = response.text().unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "member api returned error status");
    Err(classify_status(status, body))
}

/// Map a non-2xx member API status to an error
pub(crate) fn classify_status(status: StatusCode, body: String) -> OtfError {
    let code = status.as_u16();
    match status {
        StatusCode::NOT_FOUND => OtfError::NotFound { status: code, body },
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            OtfError::Authentication { status: code, body }
        }
        _ => OtfError::Http { status: code, body },
    }
}

fn parse_json<T: DeserializeOwned>(text: &str, context: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        OtfError::MalformedData(format!("unexpected response from {}: {}", context, e))
    })
}
