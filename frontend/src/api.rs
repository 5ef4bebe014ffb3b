//! HTTP client for the presence aggregate API.
//!
//! Thin wrapper over the browser Fetch API. Every endpoint is an
//! unauthenticated GET returning JSON; a missing body or non-2xx status is a
//! failure. Payloads are decoded into `serde_json::Value` and handed to the
//! typed, fail-closed parsers in `shared`.

use shared::{MonthRef, RankedEmployee, SchemaError, UserRef, WeekdayMean, WeekdaySpan, WeekdayTotal};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The response body was not JSON.
    Decode(String),
    /// The JSON did not match the endpoint's wire contract.
    Schema(SchemaError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {}", detail),
            ApiError::Status(status) => write!(f, "server responded with status {}", status),
            ApiError::Decode(detail) => write!(f, "response is not valid JSON: {}", detail),
            ApiError::Schema(error) => write!(f, "{}", error),
        }
    }
}

impl From<SchemaError> for ApiError {
    fn from(error: SchemaError) -> Self {
        ApiError::Schema(error)
    }
}

fn js_error_detail(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error))
}

/// One GET request, resolved to the raw JSON payload.
async fn fetch_json(url: &str) -> Result<serde_json::Value, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("no window object".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|error| ApiError::Network(js_error_detail(&error)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|error| ApiError::Network(js_error_detail(&error)))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let json = response
        .json()
        .map_err(|error| ApiError::Decode(js_error_detail(&error)))?;
    let json = JsFuture::from(json)
        .await
        .map_err(|error| ApiError::Decode(js_error_detail(&error)))?;

    serde_wasm_bindgen::from_value(json).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Client for the aggregate endpoints, bound to one API origin.
///
/// Cheap to clone; every view controller holds its own copy.
#[derive(Clone, Debug)]
pub struct PresenceApi {
    base: String,
}

impl PresenceApi {
    /// `base` is the API origin without a trailing slash; empty for
    /// same-origin requests.
    pub fn new(base: impl Into<String>) -> Self {
        PresenceApi { base: base.into() }
    }

    fn url(&self, path: impl fmt::Display) -> String {
        format!("{}/api/v1/{}", self.base, path)
    }

    pub async fn users(&self) -> Result<Vec<UserRef>, ApiError> {
        let raw = fetch_json(&self.url("users")).await?;
        Ok(shared::parse_users(raw)?)
    }

    pub async fn years(&self) -> Result<Vec<i32>, ApiError> {
        let raw = fetch_json(&self.url("years")).await?;
        Ok(shared::parse_years(raw)?)
    }

    pub async fn mean_time_weekday(&self, user_id: u32) -> Result<Vec<WeekdayMean>, ApiError> {
        let raw = fetch_json(&self.url(format_args!("mean_time_weekday/{}", user_id))).await?;
        Ok(shared::parse_mean_time_weekday(raw)?)
    }

    pub async fn presence_weekday(&self, user_id: u32) -> Result<Vec<WeekdayTotal>, ApiError> {
        let raw = fetch_json(&self.url(format_args!("presence_weekday/{}", user_id))).await?;
        Ok(shared::parse_presence_weekday(raw)?)
    }

    pub async fn presence_start_end(&self, user_id: u32) -> Result<Vec<WeekdaySpan>, ApiError> {
        let raw = fetch_json(&self.url(format_args!("presence_start_end/{}", user_id))).await?;
        Ok(shared::parse_presence_start_end(raw)?)
    }

    pub async fn months(&self, year: i32) -> Result<Vec<MonthRef>, ApiError> {
        let raw = fetch_json(&self.url(format_args!("top_employees/{}", year))).await?;
        Ok(shared::parse_months(raw)?)
    }

    pub async fn top_employees(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<RankedEmployee>, ApiError> {
        let raw = fetch_json(&self.url(format_args!("top_employees/{}/{}", year, month))).await?;
        Ok(shared::parse_top_employees(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_the_configured_base() {
        let api = PresenceApi::new("http://localhost:5000");
        assert_eq!(
            api.url(format_args!("mean_time_weekday/{}", 141)),
            "http://localhost:5000/api/v1/mean_time_weekday/141"
        );

        let same_origin = PresenceApi::new("");
        assert_eq!(same_origin.url("users"), "/api/v1/users");
        assert_eq!(
            same_origin.url(format_args!("top_employees/{}/{}", 2013, 9)),
            "/api/v1/top_employees/2013/9"
        );
    }
}
