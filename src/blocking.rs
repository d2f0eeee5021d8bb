//! Blocking client.
//!
//! [`BlockingTinderClient`] drives a [`TinderClient`] on a private
//! current-thread runtime, so it retries and classifies failures exactly
//! like the async surface. It must not be called from inside an async
//! runtime; use [`TinderClient`] there.
//!
//! Like `reqwest::blocking`, the client must also not be dropped inside an
//! async runtime: dropping it shuts down its runtime, which panics there.
//! Move it into `tokio::task::spawn_blocking` or drop it outside the runtime.

use std::{fmt, future::Future, sync::Arc};

use serde_json::{Map, Value};
use tokio::runtime::{Builder, Runtime};

use crate::{
    ApiRequest, AuthToken, ClientOptions, ClientUser, Location, ReportCause, Result,
    TinderClient, TinderError, Transport, User,
};

/// Blocking counterpart of [`TinderClient`] with the same endpoint surface.
pub struct BlockingTinderClient {
    inner: TinderClient,
    runtime: Runtime,
}

impl fmt::Debug for BlockingTinderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingTinderClient")
            .field("inner", &self.inner)
            .finish()
    }
}

impl BlockingTinderClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_options(token, ClientOptions::default())
    }

    pub fn with_options(token: impl Into<String>, options: ClientOptions) -> Result<Self> {
        Ok(Self {
            inner: TinderClient::with_options(token, options)?,
            runtime: build_runtime()?,
        })
    }

    pub fn with_transport(
        token: Option<AuthToken>,
        transport: Arc<dyn Transport>,
        options: ClientOptions,
    ) -> Result<Self> {
        Ok(Self {
            inner: TinderClient::with_transport(token, transport, options),
            runtime: build_runtime()?,
        })
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            inner: TinderClient::from_env()?,
            runtime: build_runtime()?,
        })
    }

    pub fn options(&self) -> &ClientOptions {
        self.inner.options()
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn execute(&self, request: &ApiRequest) -> Result<Value> {
        self.block_on(self.inner.execute(request))
    }

    pub fn execute_with_retries(&self, request: &ApiRequest, max_retries: usize) -> Result<Value> {
        self.block_on(self.inner.execute_with_retries(request, max_retries))
    }

    pub fn recommendations(&self) -> Result<Vec<Value>> {
        self.block_on(self.inner.recommendations())
    }

    pub fn recommendations_v2(&self) -> Result<Vec<Value>> {
        self.block_on(self.inner.recommendations_v2())
    }

    pub fn recommended_users(&self) -> Result<Vec<User>> {
        self.block_on(self.inner.recommended_users())
    }

    pub fn like(&self, user_id: &str) -> Result<Value> {
        self.block_on(self.inner.like(user_id))
    }

    pub fn dislike(&self, user_id: &str) -> Result<Value> {
        self.block_on(self.inner.dislike(user_id))
    }

    pub fn superlike(&self, user_id: &str) -> Result<Value> {
        self.block_on(self.inner.superlike(user_id))
    }

    pub fn matches(&self, limit: u32) -> Result<Vec<Value>> {
        self.block_on(self.inner.matches(limit))
    }

    pub fn match_info(&self, match_id: &str) -> Result<Value> {
        self.block_on(self.inner.match_info(match_id))
    }

    pub fn send_message(&self, match_id: &str, message: &str) -> Result<Value> {
        self.block_on(self.inner.send_message(match_id, message))
    }

    pub fn unmatch(&self, match_id: &str) -> Result<Value> {
        self.block_on(self.inner.unmatch(match_id))
    }

    pub fn set_location(&self, location: Location) -> Result<Value> {
        self.block_on(self.inner.set_location(location))
    }

    pub fn reset_location(&self) -> Result<Value> {
        self.block_on(self.inner.reset_location())
    }

    pub fn profile(&self) -> Result<Value> {
        self.block_on(self.inner.profile())
    }

    pub fn own_profile(&self) -> Result<ClientUser> {
        self.block_on(self.inner.own_profile())
    }

    pub fn update_profile(&self, preferences: Map<String, Value>) -> Result<Value> {
        self.block_on(self.inner.update_profile(preferences))
    }

    pub fn user_info(&self, user_id: &str) -> Result<Value> {
        self.block_on(self.inner.user_info(user_id))
    }

    pub fn report_user(&self, user_id: &str, cause: ReportCause, text: &str) -> Result<Value> {
        self.block_on(self.inner.report_user(user_id, cause, text))
    }

    pub fn updates(&self, last_activity_date: &str) -> Result<Value> {
        self.block_on(self.inner.updates(last_activity_date))
    }

    pub fn meta(&self) -> Result<Value> {
        self.block_on(self.inner.meta())
    }

    pub fn meta_v2(&self) -> Result<Value> {
        self.block_on(self.inner.meta_v2())
    }

    pub fn teasers(&self) -> Result<Value> {
        self.block_on(self.inner.teasers())
    }

    pub fn fast_match_count(&self) -> Result<Value> {
        self.block_on(self.inner.fast_match_count())
    }

    pub fn my_likes(&self) -> Result<Value> {
        self.block_on(self.inner.my_likes())
    }

    pub fn explore(&self) -> Result<Value> {
        self.block_on(self.inner.explore())
    }

    pub fn push_notifications(&self) -> Result<Value> {
        self.block_on(self.inner.push_notifications())
    }

    pub fn teaser(&self) -> Result<Value> {
        self.block_on(self.inner.teaser())
    }

    pub fn fetch_asset(&self, url: &str) -> Result<Vec<u8>> {
        self.block_on(self.inner.fetch_asset(url))
    }
}

fn build_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| TinderError::Configuration(format!("failed to start runtime: {err}")))
}
