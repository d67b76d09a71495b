//! API client for one logged-in member

use reqwest::blocking::Client;
use std::time::Duration;

use super::{auth, member, InStudioWorkouts};
use crate::config::{Config, Endpoints};
use crate::types::{Member, OtfError, Result, SessionTokens};

/// Logged-in API session.
///
/// Tokens are obtained once in [`OtfClient::login`] and never refreshed;
/// an expired token surfaces as `OtfError::Authentication` on the next call.
pub struct OtfClient {
    http: Client,
    endpoints: Endpoints,
    tokens: SessionTokens,
}

impl OtfClient {
    /// Authenticate with the configured credentials
    pub fn login(config: &Config) -> Result<Self> {
        let http = Self::build_http(config.timeout)?;
        let tokens = auth::authenticate(&http, &config.endpoints.identity, &config.credentials)?;
        Ok(Self {
            http,
            endpoints: config.endpoints.clone(),
            tokens,
        })
    }

    /// Client around tokens obtained elsewhere
    pub fn with_tokens(
        endpoints: Endpoints,
        tokens: SessionTokens,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            http: Self::build_http(timeout)?,
            endpoints,
            tokens,
        })
    }

    fn build_http(timeout: Duration) -> Result<Client> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OtfError::Request(format!("HTTP client error: {}", e)))
    }

    pub fn tokens(&self) -> &SessionTokens {
        &self.tokens
    }

    /// Fetch user attributes, then the member record keyed by their user id
    pub fn member(&self) -> Result<Member> {
        let user_attributes = member::fetch_user_attributes(
            &self.http,
            &self.endpoints.identity,
            &self.tokens.access_token,
        )?;
        let record = member::fetch_member_record(
            &self.http,
            &self.endpoints.member,
            &self.tokens.id_token,
            &user_attributes.user_id,
        )?;
        tracing::info!(user_id = %user_attributes.user_id, "fetched member record");

        Ok(Member {
            user_attributes,
            record,
        })
    }

    /// Fetch the in-studio workout history
    pub fn in_studio_workouts(&self) -> Result<InStudioWorkouts> {
        InStudioWorkouts::fetch(
            &self.http,
            &self.endpoints.in_studio_workouts,
            &self.tokens.id_token,
        )
    }
}
