//! # Xendit Client SDK
//!
//! A typed Rust client for the Xendit payment request and payout APIs.
//!
//! Every operation validates its parameters locally, sends a single
//! authenticated request and returns the response body as JSON, or a typed
//! error.
//!
//! ```no_run
//! use xendit_client::{Amount, PayoutChannelProperties, PayoutParams, XenditClient};
//!
//! # async fn run() -> Result<(), xendit_client::ClientError> {
//! let client = XenditClient::new("xnd_development_...");
//! let payout = client
//!     .payouts()
//!     .create(&PayoutParams {
//!         reference_id: Some("payout-1001".into()),
//!         channel_code: Some("ID_BCA".into()),
//!         channel_properties: Some(PayoutChannelProperties::new("Michael Chen", "000000000099")),
//!         amount: Some(Amount::from(100_000)),
//!         currency: Some("IDR".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", payout["status"]);
//! # Ok(())
//! # }
//! ```

pub mod payment_request;
pub mod payout;
pub mod response;
pub mod transport;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::InvalidHeaderName;

pub use payment_request::PaymentRequests;
pub use payout::Payouts;
pub use transport::{RawResponse, Transport};
pub use xendit_types::{
    AccountType, Amount, ApiError, Country, Credentials, Currency, PaymentRequestParams,
    PaymentRequestType, PayoutChannelProperties, PayoutParams, ReceiptNotification,
    RequestHeaders, ValidationError,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network or protocol failure; the request may not have reached the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A header name passed directly to [`Transport::get`] or
    /// [`Transport::post`] that is not a valid HTTP token. The facades only
    /// send the fixed header names.
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),

    #[error("Invalid value for header {name}")]
    InvalidHeaderValue { name: String },

    #[error("Invalid base URL: {base_url}")]
    InvalidBaseUrl { base_url: String },
}

impl ClientError {
    /// Returns the API error, if the platform rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true when the request was rejected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

/// Xendit API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct XenditClient {
    transport: Transport,
}

impl XenditClient {
    /// Creates a client for the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_credentials(Credentials::new(api_key))
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            transport: Transport::new(credentials, Client::new()),
        }
    }

    /// Sets the base URL, e.g. for a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let credentials = self.transport.credentials.clone().with_base_url(base_url);
        self.transport.credentials = credentials;
        self
    }

    /// Applies a total timeout to every request.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(self.with_http_client(http))
    }

    /// Uses a preconfigured `reqwest` client (proxies, TLS, timeouts).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.transport.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        self.transport.credentials().base_url()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn payment_requests(&self) -> PaymentRequests<'_> {
        PaymentRequests::new(&self.transport)
    }

    pub fn payouts(&self) -> Payouts<'_> {
        Payouts::new(&self.transport)
    }
}
