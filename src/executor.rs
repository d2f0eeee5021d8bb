use std::{fmt, sync::Arc};

use serde_json::Value;
use tokio::time::{sleep, timeout};

use crate::{
    auth::{build_asset_headers, build_headers, AuthToken},
    request::{is_supported_method, join_url},
    ApiRequest, ClientOptions, Method, PreparedRequest, RawResponse, Result, TinderError,
    Transport, TransportError,
};

/// How a received HTTP status is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx: decode and return the body.
    Success,
    /// 5xx: retry while attempts remain.
    Transient,
    /// Anything else: surface immediately.
    Terminal,
}

pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        status if status >= 500 => StatusClass::Transient,
        _ => StatusClass::Terminal,
    }
}

/// Turns [`ApiRequest`]s into decoded JSON or a classified [`TinderError`].
///
/// Holds no per-call state, so one executor can serve any number of
/// concurrent calls without locking.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    token: Option<AuthToken>,
    options: ClientOptions,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("options", &self.options)
            .finish()
    }
}

impl Executor {
    pub fn new(
        transport: Arc<dyn Transport>,
        token: Option<AuthToken>,
        options: ClientOptions,
    ) -> Self {
        Self {
            transport,
            token,
            options,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Executes `request` with the configured retry budget.
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        self.execute_with_retries(request, self.options.max_retries).await
    }

    /// Executes `request`, making at most `max_retries + 1` attempts.
    ///
    /// Timeouts, transport errors and 5xx statuses are retried after an
    /// exponential backoff; everything else fails on the first attempt.
    pub async fn execute_with_retries(
        &self,
        request: &ApiRequest,
        max_retries: usize,
    ) -> Result<Value> {
        let token = self.token.as_ref().ok_or_else(|| {
            TinderError::Configuration("auth token is not configured".to_owned())
        })?;
        if !is_supported_method(&request.method) {
            return Err(TinderError::UnsupportedMethod(request.method.clone()));
        }

        let prepared = PreparedRequest {
            method: request.method.clone(),
            url: join_url(&self.options.base_url, &request.path),
            headers: build_headers(token, request.has_body())?,
            body: request.body.clone(),
        };
        let response = self.send_with_retry(prepared, max_retries).await?;
        decode_body(response)
    }

    /// Downloads a photo from its absolute CDN URL.
    ///
    /// Photo URLs are signed by the CDN, so the auth token is not sent and
    /// no token is required. Retry and status handling match
    /// [`Executor::execute`]; a missing photo surfaces as `Http { status: 404 }`.
    pub async fn fetch_asset(&self, url: &str) -> Result<Vec<u8>> {
        let parsed =
            reqwest::Url::parse(url).map_err(|_| TinderError::InvalidUrl(url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TinderError::InvalidUrl(url.to_owned()));
        }

        let prepared = PreparedRequest {
            method: Method::GET,
            url: parsed.into(),
            headers: build_asset_headers(),
            body: None,
        };
        let response = self.send_with_retry(prepared, self.options.max_retries).await?;
        Ok(response.body)
    }

    /// Sends `prepared` until it succeeds, fails terminally, or exhausts
    /// `max_retries`. Returns the raw 2xx response.
    async fn send_with_retry(
        &self,
        prepared: PreparedRequest,
        max_retries: usize,
    ) -> Result<RawResponse> {
        let mut attempt = 0usize;
        loop {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                method = %prepared.method,
                url = %prepared.url,
                attempt = attempt + 1,
                "sending request"
            );

            match self.send_once(prepared.clone()).await {
                Ok(response) => match classify_status(response.status) {
                    StatusClass::Success => return Ok(response),
                    StatusClass::Transient if attempt < max_retries => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            status = response.status,
                            url = %prepared.url,
                            attempt = attempt + 1,
                            "server error"
                        );
                    }
                    _ => {
                        #[cfg(feature = "tracing")]
                        tracing::error!(
                            status = response.status,
                            url = %prepared.url,
                            attempts = attempt + 1,
                            "http error"
                        );
                        return Err(TinderError::Http {
                            status: response.status,
                            body: response.text(),
                        });
                    }
                },
                Err(err) => {
                    if attempt >= max_retries {
                        #[cfg(feature = "tracing")]
                        tracing::error!(
                            url = %prepared.url,
                            attempts = attempt + 1,
                            error = %err,
                            "request failed"
                        );
                        return Err(TinderError::RequestFailed {
                            attempts: attempt + 1,
                            source: err,
                        });
                    }
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        url = %prepared.url,
                        attempt = attempt + 1,
                        error = %err,
                        "transport error"
                    );
                }
            }

            self.wait_before_retry(attempt).await;
            attempt += 1;
        }
    }

    async fn send_once(
        &self,
        request: PreparedRequest,
    ) -> std::result::Result<RawResponse, TransportError> {
        match timeout(self.options.timeout(), self.transport.send(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(TransportError::Timeout),
        }
    }

    async fn wait_before_retry(&self, attempt: usize) {
        let delay = self.options.backoff_delay(attempt);

        #[cfg(feature = "tracing")]
        tracing::debug!("retrying request after {} ms", delay.as_millis());

        sleep(delay).await;
    }
}

fn decode_body(response: RawResponse) -> Result<Value> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&response.body).map_err(|err| {
        TinderError::Decode(format!(
            "invalid response JSON: {err}; body: {}",
            response.text()
        ))
    })
}
