//! Member profile: identity-provider attributes and the member record

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::http::{authorized_get, identity_post};
use super::normalizer::sanitize_attribute_name;
use crate::types::{JsonObject, MemberRecord, OtfError, Result, UserAttributes};

const GET_USER_TARGET: &str = "AWSCognitoIdentityProviderService.GetUser";

/// Sub-resource requested alongside the member record
const MEMBER_INCLUDE: &str = "memberClassSummary";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserResponse {
    username: String,
    #[serde(default)]
    user_attributes: Vec<AttributeType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AttributeType {
    name: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct MemberResponse {
    data: Option<JsonObject>,
}

/// Fetch the caller's attributes using the access token
pub fn fetch_user_attributes(
    http: &Client,
    identity_url: &str,
    access_token: &str,
) -> Result<UserAttributes> {
    let body = json!({ "AccessToken": access_token });
    let response: GetUserResponse = identity_post(http, identity_url, GET_USER_TARGET, &body)?;
    Ok(user_attributes_from(response))
}

fn user_attributes_from(response: GetUserResponse) -> UserAttributes {
    let mut attributes: BTreeMap<String, String> = response
        .user_attributes
        .into_iter()
        .map(|attr| (sanitize_attribute_name(&attr.name), attr.value))
        .collect();
    attributes.insert("user_id".to_string(), response.username.clone());

    UserAttributes {
        user_id: response.username,
        attributes,
    }
}

/// Fetch the member record (with class summary) for `user_id`
pub fn fetch_member_record(
    http: &Client,
    member_url: &str,
    id_token: &str,
    user_id: &str,
) -> Result<MemberRecord> {
    let url = format!("{}/{}", member_url.trim_end_matches('/'), user_id);
    let response: MemberResponse =
        authorized_get(http, &url, id_token, &[("include", MEMBER_INCLUDE)])?;

    let data = response
        .data
        .ok_or_else(|| OtfError::MalformedData("member response has no 'data' object".into()))?;
    split_member_record(data)
}

/// Split the member `data` object into its four parts
fn split_member_record(mut data: JsonObject) -> Result<MemberRecord> {
    let class_summary = take_object(&mut data, "memberClassSummary")?;
    let home_studio = take_object(&mut data, "homeStudio")?;
    let member_profile = take_object(&mut data, "memberProfile")?;

    Ok(MemberRecord {
        class_summary,
        home_studio,
        member_profile,
        member_data: data,
    })
}

fn take_object(data: &mut JsonObject, key: &str) -> Result<JsonObject> {
    match data.remove(key) {
        Some(Value::Object(obj)) => Ok(obj),
        Some(other) => Err(OtfError::MalformedData(format!(
            "member field '{}' is not an object: {}",
            key, other
        ))),
        None => Err(OtfError::MalformedData(format!("member record has no '{}'", key))),
    }
}
