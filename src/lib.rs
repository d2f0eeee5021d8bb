//! `tinder-http` is a resilient HTTP client for the Tinder REST API.
//!
//! Every call goes through one [`Executor`] that injects the session token,
//! classifies failures and retries transient ones with exponential backoff:
//! - [`TinderClient`] exposes the endpoint catalog as async methods
//! - [`blocking::BlockingTinderClient`] exposes the same catalog as blocking
//!   calls (feature `blocking`)
//! - [`endpoints`] builds the [`ApiRequest`] for each operation

mod auth;
mod client;
mod error;
mod executor;
mod options;
mod request;
mod transport;
mod types;

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod endpoints;

pub use auth::{AuthToken, TOKEN_ENV_VAR};
pub use client::TinderClient;
pub use error::{TinderError, TransportError};
pub use executor::{classify_status, Executor, StatusClass};
pub use options::{ClientOptions, DEFAULT_BASE_URL};
pub use request::{ApiRequest, PreparedRequest, RawResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{ClientUser, Location, Photo, ProcessedFile, ReportCause, User};

pub use reqwest::Method;

pub type Result<T> = std::result::Result<T, TinderError>;
