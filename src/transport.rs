use async_trait::async_trait;

use crate::{PreparedRequest, RawResponse, Result, TinderError, TransportError};

/// Sends one prepared request and reports the raw outcome.
///
/// Implementations do not retry or classify statuses; the executor owns that.
/// A returned [`TransportError`] always counts as a transient failure.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: PreparedRequest,
    ) -> std::result::Result<RawResponse, TransportError>;
}

/// Production transport backed by a pooled `reqwest::Client`.
///
/// The connection pool lives as long as the transport and is closed when the
/// last owning client is dropped.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_proxy(None)
    }

    /// Builds a transport routing every request through `proxy` when given.
    pub fn with_proxy(proxy: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(url) = proxy {
            let proxy = reqwest::Proxy::all(url).map_err(|err| {
                TinderError::Configuration(format!("invalid proxy url '{url}': {err}"))
            })?;
            builder = builder.proxy(proxy);
        }
        let http = builder.build().map_err(|err| {
            TinderError::Configuration(format!("failed to build http client: {err}"))
        })?;
        Ok(Self { http })
    }

    /// Wraps an existing client, e.g. one with custom TLS roots.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: PreparedRequest,
    ) -> std::result::Result<RawResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}
