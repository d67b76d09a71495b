//! Account and member types

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::JsonObject;

/// Login credentials. Only used for the authentication exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Bearer tokens returned by the identity provider
#[derive(Clone, PartialEq, Eq)]
pub struct SessionTokens {
    /// Authorizes member and workout requests
    pub id_token: String,
    /// Authorizes the user-attribute lookup
    pub access_token: String,
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("id_token", &"<redacted>")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Identity-provider attributes of the logged-in user.
///
/// Attribute names are sanitized (`:` → `_`) before being stored.
/// The synthetic `user_id` attribute mirrors [`UserAttributes::user_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAttributes {
    pub user_id: String,
    pub attributes: BTreeMap<String, String>,
}

impl UserAttributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Member record split into its named sub-objects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRecord {
    pub class_summary: JsonObject,
    pub home_studio: JsonObject,
    pub member_profile: JsonObject,
    /// Every remaining top-level member field
    pub member_data: JsonObject,
}

/// Everything known about the logged-in member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub user_attributes: UserAttributes,
    #[serde(flatten)]
    pub record: MemberRecord,
}

impl Member {
    pub fn class_summary(&self) -> &JsonObject {
        &self.record.class_summary
    }

    pub fn home_studio(&self) -> &JsonObject {
        &self.record.home_studio
    }

    pub fn member_profile(&self) -> &JsonObject {
        &self.record.member_profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials {
            client_id: "client".into(),
            username: "me@example.com".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("me@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_tokens_debug_redacts_values() {
        let tokens = SessionTokens {
            id_token: "id-abc".into(),
            access_token: "access-xyz".into(),
        };
        let debug = format!("{:?}", tokens);
        assert!(!debug.contains("id-abc"));
        assert!(!debug.contains("access-xyz"));
    }

    #[test]
    fn test_user_attributes_get() {
        let mut attributes = BTreeMap::new();
        attributes.insert("email".to_string(), "me@example.com".to_string());
        let attrs = UserAttributes {
            user_id: "u1".into(),
            attributes,
        };
        assert_eq!(attrs.get("email"), Some("me@example.com"));
        assert_eq!(attrs.get("missing"), None);
    }
}
