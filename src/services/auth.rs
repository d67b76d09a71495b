//! Password-grant login against the identity provider

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use super::http::identity_post;
use crate::types::{Credentials, OtfError, Result, SessionTokens};

const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const AUTH_FLOW: &str = "USER_PASSWORD_AUTH";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: Option<AuthenticationResult>,
    challenge_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    id_token: String,
    access_token: String,
}

/// Exchange credentials for an identity token and an access token.
///
/// Any non-2xx response fails with `OtfError::Authentication`. A 2xx
/// response without both tokens (e.g. a pending challenge) is malformed.
pub fn authenticate(
    http: &Client,
    identity_url: &str,
    credentials: &Credentials,
) -> Result<SessionTokens> {
    let body = json!({
        "AuthParameters": {
            "USERNAME": credentials.username,
            "PASSWORD": credentials.password,
        },
        "AuthFlow": AUTH_FLOW,
        "ClientId": credentials.client_id,
    });

    let response: InitiateAuthResponse =
        identity_post(http, identity_url, INITIATE_AUTH_TARGET, &body)?;

    let result = match response.authentication_result {
        Some(r) => r,
        None => {
            let detail = match response.challenge_name {
                Some(challenge) => format!("login requires challenge {}", challenge),
                None => "missing AuthenticationResult".to_string(),
            };
            return Err(OtfError::MalformedData(detail));
        }
    };

    if result.id_token.is_empty() || result.access_token.is_empty() {
        return Err(OtfError::MalformedData("empty token in AuthenticationResult".into()));
    }

    tracing::info!(username = %credentials.username, "authenticated");

    Ok(SessionTokens {
        id_token: result.id_token,
        access_token: result.access_token,
    })
}
