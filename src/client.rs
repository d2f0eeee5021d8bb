use std::{fmt, sync::Arc};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    endpoints::{self, extract_matches, extract_results},
    ApiRequest, AuthToken, ClientOptions, ClientUser, Executor, Location, ReportCause,
    ReqwestTransport, Result, TinderError, Transport, User,
};

#[derive(Clone)]
/// Async client for the Tinder REST API.
///
/// Cloning is cheap: clones share the executor and connection pool. Calls
/// on one client may run concurrently; they share no mutable state, so the
/// caller is responsible for ordering calls that depend on each other.
pub struct TinderClient {
    executor: Arc<Executor>,
}

impl fmt::Debug for TinderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TinderClient")
            .field("executor", &self.executor)
            .finish()
    }
}

impl TinderClient {
    /// Creates a client for the production API.
    ///
    /// A blank token is accepted here; every call then fails with
    /// [`TinderError::Configuration`](crate::TinderError::Configuration)
    /// without touching the network.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_options(token, ClientOptions::default())
    }

    /// Creates a client with explicit options (host, timeout, retries, proxy).
    pub fn with_options(token: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let transport = ReqwestTransport::with_proxy(options.proxy.as_deref())?;
        Ok(Self::with_transport(
            AuthToken::new(token),
            Arc::new(transport),
            options,
        ))
    }

    /// Creates a client over a custom [`Transport`].
    pub fn with_transport(
        token: Option<AuthToken>,
        transport: Arc<dyn Transport>,
        options: ClientOptions,
    ) -> Self {
        Self {
            executor: Arc::new(Executor::new(transport, token, options)),
        }
    }

    /// Creates a client from `TINDER_AUTH_TOKEN`.
    ///
    /// Returns a configuration error if the variable is missing or empty.
    pub fn from_env() -> Result<Self> {
        let token = AuthToken::from_env()?;
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(
            Some(token),
            Arc::new(transport),
            ClientOptions::default(),
        ))
    }

    pub fn options(&self) -> &ClientOptions {
        self.executor.options()
    }

    /// Executes an arbitrary request with the configured retry budget.
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        self.executor.execute(request).await
    }

    /// Executes an arbitrary request with an explicit retry budget.
    pub async fn execute_with_retries(
        &self,
        request: &ApiRequest,
        max_retries: usize,
    ) -> Result<Value> {
        self.executor.execute_with_retries(request, max_retries).await
    }

    /// Fetches profiles to swipe on.
    pub async fn recommendations(&self) -> Result<Vec<Value>> {
        extract_results(self.execute(&endpoints::recommendations()).await?)
    }

    /// Fetches profiles from the v2 endpoint, which tracks location changes
    /// more reliably.
    pub async fn recommendations_v2(&self) -> Result<Vec<Value>> {
        extract_results(self.execute(&endpoints::recommendations_v2()).await?)
    }

    /// Recommendations decoded into [`User`] profiles.
    pub async fn recommended_users(&self) -> Result<Vec<User>> {
        self.recommendations()
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Swipes right. The response carries the `match` flag.
    pub async fn like(&self, user_id: &str) -> Result<Value> {
        self.execute(&endpoints::like(user_id)).await
    }

    /// Swipes left.
    pub async fn dislike(&self, user_id: &str) -> Result<Value> {
        self.execute(&endpoints::dislike(user_id)).await
    }

    pub async fn superlike(&self, user_id: &str) -> Result<Value> {
        self.execute(&endpoints::superlike(user_id)).await
    }

    pub async fn matches(&self, limit: u32) -> Result<Vec<Value>> {
        extract_matches(self.execute(&endpoints::matches(limit)).await?)
    }

    pub async fn match_info(&self, match_id: &str) -> Result<Value> {
        self.execute(&endpoints::match_info(match_id)).await
    }

    pub async fn send_message(&self, match_id: &str, message: &str) -> Result<Value> {
        self.execute(&endpoints::send_message(match_id, message)).await
    }

    pub async fn unmatch(&self, match_id: &str) -> Result<Value> {
        self.execute(&endpoints::unmatch(match_id)).await
    }

    /// Moves the account to `location` (passport / travel).
    pub async fn set_location(&self, location: Location) -> Result<Value> {
        self.execute(&endpoints::set_location(location)).await
    }

    pub async fn reset_location(&self) -> Result<Value> {
        self.execute(&endpoints::reset_location()).await
    }

    pub async fn profile(&self) -> Result<Value> {
        self.execute(&endpoints::profile()).await
    }

    /// The account's own profile as a [`ClientUser`].
    ///
    /// Accepts both the bare profile object and the `data.user` envelope.
    pub async fn own_profile(&self) -> Result<ClientUser> {
        let mut profile = self.profile().await?;
        let enveloped = profile.pointer_mut("/data/user").map(Value::take);
        decode(enveloped.unwrap_or(profile))
    }

    pub async fn update_profile(&self, preferences: Map<String, Value>) -> Result<Value> {
        self.execute(&endpoints::update_profile(preferences)).await
    }

    pub async fn user_info(&self, user_id: &str) -> Result<Value> {
        self.execute(&endpoints::user_info(user_id)).await
    }

    pub async fn report_user(
        &self,
        user_id: &str,
        cause: ReportCause,
        text: &str,
    ) -> Result<Value> {
        self.execute(&endpoints::report_user(user_id, cause, text)).await
    }

    pub async fn updates(&self, last_activity_date: &str) -> Result<Value> {
        self.execute(&endpoints::updates(last_activity_date)).await
    }

    pub async fn meta(&self) -> Result<Value> {
        self.execute(&endpoints::meta()).await
    }

    pub async fn meta_v2(&self) -> Result<Value> {
        self.execute(&endpoints::meta_v2()).await
    }

    pub async fn teasers(&self) -> Result<Value> {
        self.execute(&endpoints::teasers()).await
    }

    pub async fn fast_match_count(&self) -> Result<Value> {
        self.execute(&endpoints::fast_match_count()).await
    }

    pub async fn my_likes(&self) -> Result<Value> {
        self.execute(&endpoints::my_likes()).await
    }

    pub async fn explore(&self) -> Result<Value> {
        self.execute(&endpoints::explore()).await
    }

    pub async fn push_notifications(&self) -> Result<Value> {
        self.execute(&endpoints::push_notifications()).await
    }

    pub async fn teaser(&self) -> Result<Value> {
        self.execute(&endpoints::teaser()).await
    }

    /// Downloads a photo (e.g. [`Photo::url`](crate::Photo::url)) as raw bytes.
    ///
    /// Retries like any API call. A missing or expired photo surfaces as
    /// [`TinderError::Http`]; see [`TinderError::is_not_found`] and
    /// [`TinderError::is_forbidden`]. The auth token is not sent.
    pub async fn fetch_asset(&self, url: &str) -> Result<Vec<u8>> {
        self.executor.fetch_asset(url).await
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| TinderError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::TinderClient;

    #[test]
    fn debug_redacts_token() {
        let client = TinderClient::new("secret-token").expect("client must build");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn default_options_target_production_host() {
        let client = TinderClient::new("tok").expect("client must build");
        assert_eq!(client.options().base_url, "https://api.gotinder.com");
        assert_eq!(client.options().max_retries, 3);
    }
}
