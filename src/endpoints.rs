//! Endpoint catalog.
//!
//! Each function maps one API operation to an [`ApiRequest`]. Path
//! parameters are percent-encoded; payloads are built here so both client
//! surfaces send byte-identical requests.

use serde_json::{json, Map, Value};

use crate::{ApiRequest, Location, ReportCause, Result, TinderError};

/// Match count requested when the caller does not pick one.
pub const DEFAULT_MATCH_COUNT: u32 = 60;

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

pub fn recommendations() -> ApiRequest {
    ApiRequest::get("/user/recs")
}

pub fn recommendations_v2() -> ApiRequest {
    ApiRequest::get("/v2/recs/core?locale=en-US")
}

pub fn like(user_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/like/{}", encode(user_id)))
}

pub fn dislike(user_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/pass/{}", encode(user_id)))
}

pub fn superlike(user_id: &str) -> ApiRequest {
    ApiRequest::post(format!("/like/{}/super", encode(user_id)))
}

pub fn matches(limit: u32) -> ApiRequest {
    ApiRequest::get(format!("/v2/matches?count={limit}"))
}

pub fn match_info(match_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/matches/{}", encode(match_id)))
}

pub fn send_message(match_id: &str, message: &str) -> ApiRequest {
    ApiRequest::post(format!("/user/matches/{}", encode(match_id)))
        .with_json(json!({ "message": message }))
}

pub fn unmatch(match_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/user/matches/{}", encode(match_id)))
}

pub fn set_location(location: Location) -> ApiRequest {
    ApiRequest::post("/passport/user/travel").with_json(json!(location))
}

pub fn reset_location() -> ApiRequest {
    ApiRequest::post("/passport/user/reset")
}

pub fn profile() -> ApiRequest {
    ApiRequest::get("/profile")
}

/// Updates profile preferences such as `age_filter_min` or `distance_filter`.
pub fn update_profile(preferences: Map<String, Value>) -> ApiRequest {
    ApiRequest::post("/profile").with_json(Value::Object(preferences))
}

pub fn user_info(user_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/user/{}", encode(user_id)))
}

pub fn report_user(user_id: &str, cause: ReportCause, text: &str) -> ApiRequest {
    ApiRequest::post(format!("/report/{}", encode(user_id)))
        .with_json(json!({ "cause": cause.code(), "text": text }))
}

/// `last_activity_date` is an ISO-8601 timestamp; empty asks for everything.
pub fn updates(last_activity_date: &str) -> ApiRequest {
    ApiRequest::post("/updates").with_json(json!({ "last_activity_date": last_activity_date }))
}

pub fn meta() -> ApiRequest {
    ApiRequest::get("/meta")
}

pub fn meta_v2() -> ApiRequest {
    ApiRequest::get("/v2/meta")
}

pub fn teasers() -> ApiRequest {
    ApiRequest::get("/v2/fast-match/teasers")
}

pub fn fast_match_count() -> ApiRequest {
    ApiRequest::post("/v2/fast-match/count")
}

pub fn my_likes() -> ApiRequest {
    ApiRequest::get("/v2/my-likes?locale=en")
}

pub fn explore() -> ApiRequest {
    ApiRequest::get("/v2/explore?locale=en")
}

/// Acknowledges pending push notifications.
pub fn push_notifications() -> ApiRequest {
    ApiRequest::put("/v2/push/notifications?locale=en")
}

/// Single teaser of recently active likers.
pub fn teaser() -> ApiRequest {
    ApiRequest::get("/v2/fast-match/teaser?locale=en&type=recently-active")
}

/// Extracts `results` from a recommendations response.
pub fn extract_results(response: Value) -> Result<Vec<Value>> {
    extract_list(response, &["results"])
}

/// Extracts `data.matches` from a matches response.
pub fn extract_matches(response: Value) -> Result<Vec<Value>> {
    extract_list(response, &["data", "matches"])
}

/// Walks `path` into `response`. A missing or null key yields an empty list;
/// any other non-array value is a decode error.
fn extract_list(mut response: Value, path: &[&str]) -> Result<Vec<Value>> {
    for key in path {
        response = match response {
            Value::Object(mut map) => map.remove(*key).unwrap_or(Value::Null),
            Value::Null => Value::Null,
            other => {
                return Err(TinderError::Decode(format!(
                    "expected object while reading '{}', got {}",
                    path.join("."),
                    type_name(&other)
                )))
            }
        };
    }

    match response {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(TinderError::Decode(format!(
            "expected array at '{}', got {}",
            path.join("."),
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
