use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};

use crate::{Result, TinderError};

/// Environment variable read by [`AuthToken::from_env`].
pub const TOKEN_ENV_VAR: &str = "TINDER_AUTH_TOKEN";

const AUTH_HEADER: HeaderName = HeaderName::from_static("x-auth-token");
const APP_VERSION_HEADER: HeaderName = HeaderName::from_static("app_version");
const PLATFORM_HEADER: HeaderName = HeaderName::from_static("platform");

const APP_VERSION: &str = "6.9.4";
const PLATFORM: &str = "ios";
const CLIENT_USER_AGENT: &str = "Tinder/7.5.3 (iPhone; iOS 10.3.2; Scale/2.00)";

/// Session token sent as `X-Auth-Token` on every request.
///
/// The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token, returning `None` when it is blank.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Reads the token from `TINDER_AUTH_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            TinderError::Configuration(format!("missing {TOKEN_ENV_VAR} environment variable"))
        })?;
        Self::new(raw).ok_or_else(|| {
            TinderError::Configuration(format!("{TOKEN_ENV_VAR} is set but empty"))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Builds the header set for one request: client identity, auth token and,
/// when a payload is present, a JSON content type.
pub(crate) fn build_headers(token: &AuthToken, has_body: bool) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(6);
    headers.insert(APP_VERSION_HEADER, HeaderValue::from_static(APP_VERSION));
    headers.insert(PLATFORM_HEADER, HeaderValue::from_static(PLATFORM));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut auth = HeaderValue::from_str(token.as_str()).map_err(|_| {
        TinderError::Configuration("auth token contains invalid header characters".to_owned())
    })?;
    auth.set_sensitive(true);
    headers.insert(AUTH_HEADER, auth);

    if has_body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    Ok(headers)
}

/// Headers for photo downloads: client identity only, never the token.
pub(crate) fn build_asset_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("image/*"));
    headers
}

#[cfg(test)]
mod tests {
    use reqwest::header::CONTENT_TYPE;

    use super::{build_asset_headers, build_headers, AuthToken};

    #[test]
    fn blank_token_is_treated_as_missing() {
        assert!(AuthToken::new("").is_none());
        assert!(AuthToken::new("   ").is_none());
        assert_eq!(AuthToken::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn debug_redacts_token_value() {
        let token = AuthToken::new("secret-token").unwrap();
        let debug = format!("{token:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn headers_carry_identity_and_token() {
        let token = AuthToken::new("tok").unwrap();
        let headers = build_headers(&token, false).unwrap();
        assert_eq!(headers["x-auth-token"], "tok");
        assert_eq!(headers["app_version"], "6.9.4");
        assert_eq!(headers["platform"], "ios");
        assert_eq!(headers["accept"], "application/json");
        assert!(headers["user-agent"].to_str().unwrap().starts_with("Tinder/"));
        assert!(!headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn content_type_only_with_body() {
        let token = AuthToken::new("tok").unwrap();
        let headers = build_headers(&token, true).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn asset_headers_never_carry_token() {
        let headers = build_asset_headers();
        assert!(!headers.contains_key("x-auth-token"));
        assert_eq!(headers["accept"], "image/*");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let token = AuthToken::new("bad\ntoken").unwrap();
        assert!(build_headers(&token, false).is_err());
    }
}
