//! Payment request operations.

use serde_json::Value;

use xendit_types::validation::{validate_payment_request_id, validate_payment_request_params};
use xendit_types::{
    API_VERSION_HEADER, DEFAULT_API_VERSION, PaymentRequestParams, RequestHeaders, ValidationError,
};

use crate::ClientError;
use crate::response::handle_response;
use crate::transport::Transport;

const PAYMENT_REQUESTS_PATH: &str = "v3/payment_requests";

/// Payment request resource, obtained from [`XenditClient::payment_requests`].
///
/// [`XenditClient::payment_requests`]: crate::XenditClient::payment_requests
pub struct PaymentRequests<'a> {
    transport: &'a Transport,
}

impl<'a> PaymentRequests<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Creates a payment request.
    pub async fn create(&self, params: &PaymentRequestParams) -> Result<Value, ClientError> {
        self.create_with_headers(params, &RequestHeaders::default())
            .await
    }

    /// Creates a payment request with caller-supplied headers.
    ///
    /// `api-version` defaults to [`DEFAULT_API_VERSION`].
    #[tracing::instrument(skip_all, fields(reference_id = ?params.reference_id))]
    pub async fn create_with_headers(
        &self,
        params: &PaymentRequestParams,
        headers: &RequestHeaders,
    ) -> Result<Value, ClientError> {
        if params.is_empty() {
            return Err(ValidationError::Missing("payment_request_params").into());
        }
        validate_payment_request_params(params)?;

        let headers = build_headers(headers);
        let resp = self
            .transport
            .post(PAYMENT_REQUESTS_PATH, &headers, params)
            .await?;
        handle_response(resp)
    }

    /// Gets a payment request by its 39-character ID.
    pub async fn get(&self, payment_request_id: &str) -> Result<Value, ClientError> {
        self.get_with_headers(payment_request_id, &RequestHeaders::default())
            .await
    }

    #[tracing::instrument(skip(self, headers))]
    pub async fn get_with_headers(
        &self,
        payment_request_id: &str,
        headers: &RequestHeaders,
    ) -> Result<Value, ClientError> {
        validate_payment_request_id(payment_request_id)?;

        let headers = build_headers(headers);
        let resp = self
            .transport
            .get_resource(PAYMENT_REQUESTS_PATH, payment_request_id, &headers)
            .await?;
        handle_response(resp)
    }
}

fn build_headers(custom: &RequestHeaders) -> Vec<(&'static str, String)> {
    let api_version = custom
        .api_version
        .clone()
        .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

    let mut headers = vec![(API_VERSION_HEADER, api_version)];
    headers.extend(custom.routing_headers());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_version() {
        let headers = build_headers(&RequestHeaders::default());
        assert_eq!(headers, vec![("api-version", "2024-11-11".to_string())]);
    }

    #[test]
    fn test_api_version_override_and_routing() {
        let custom = RequestHeaders::new()
            .with_api_version("2025-01-01")
            .with_for_user_id("5f9a3fbd571a1c4068aa40cf")
            .with_idempotency_key("ignored-here");
        let headers = build_headers(&custom);
        assert_eq!(
            headers,
            vec![
                ("api-version", "2025-01-01".to_string()),
                ("for-user-id", "5f9a3fbd571a1c4068aa40cf".to_string()),
            ]
        );
    }
}
