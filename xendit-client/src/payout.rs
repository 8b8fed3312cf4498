//! Payout operations.

use serde_json::Value;

use xendit_types::validation::{
    resolve_idempotency_key, validate_payout_id, validate_payout_params,
    validate_payout_reference_id,
};
use xendit_types::{
    API_VERSION_HEADER, IDEMPOTENCY_KEY_HEADER, PayoutParams, RequestHeaders, ValidationError,
};

use crate::ClientError;
use crate::response::handle_response;
use crate::transport::Transport;

const PAYOUTS_PATH: &str = "v2/payouts";

/// Payout resource, obtained from [`XenditClient::payouts`].
///
/// [`XenditClient::payouts`]: crate::XenditClient::payouts
pub struct Payouts<'a> {
    transport: &'a Transport,
}

impl<'a> Payouts<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Creates a payout, using `reference_id` as the idempotency key.
    pub async fn create(&self, params: &PayoutParams) -> Result<Value, ClientError> {
        self.create_with_headers(params, &RequestHeaders::default())
            .await
    }

    /// Creates a payout with caller-supplied headers.
    ///
    /// An `idempotency_key` in `headers` takes precedence over the payout's
    /// `reference_id`. Retrying with the same key does not create a second
    /// payout.
    #[tracing::instrument(skip_all, fields(reference_id = ?params.reference_id))]
    pub async fn create_with_headers(
        &self,
        params: &PayoutParams,
        headers: &RequestHeaders,
    ) -> Result<Value, ClientError> {
        if params.is_empty() {
            return Err(ValidationError::Missing("payout_params").into());
        }
        validate_payout_params(params)?;

        let headers = build_headers(headers, Some(params))?;
        let resp = self.transport.post(PAYOUTS_PATH, &headers, params).await?;
        handle_response(resp)
    }

    /// Gets a payout by its 29-character ID.
    pub async fn get(&self, payout_id: &str) -> Result<Value, ClientError> {
        self.get_with_headers(payout_id, &RequestHeaders::default())
            .await
    }

    #[tracing::instrument(skip(self, headers))]
    pub async fn get_with_headers(
        &self,
        payout_id: &str,
        headers: &RequestHeaders,
    ) -> Result<Value, ClientError> {
        validate_payout_id(payout_id)?;

        let headers = build_headers(headers, None)?;
        let resp = self
            .transport
            .get_resource(PAYOUTS_PATH, payout_id, &headers)
            .await?;
        handle_response(resp)
    }

    /// Lists payouts created with the given reference ID.
    pub async fn get_by_reference_id(&self, reference_id: &str) -> Result<Value, ClientError> {
        self.get_by_reference_id_with_headers(reference_id, &RequestHeaders::default())
            .await
    }

    #[tracing::instrument(skip(self, headers))]
    pub async fn get_by_reference_id_with_headers(
        &self,
        reference_id: &str,
        headers: &RequestHeaders,
    ) -> Result<Value, ClientError> {
        validate_payout_reference_id(reference_id)?;

        let headers = build_headers(headers, None)?;
        let resp = self
            .transport
            .get(PAYOUTS_PATH, &[("reference_id", reference_id)], &headers)
            .await?;
        handle_response(resp)
    }
}

/// The idempotency key is only resolved, and only sent, when creating.
fn build_headers(
    custom: &RequestHeaders,
    creating: Option<&PayoutParams>,
) -> Result<Vec<(&'static str, String)>, ValidationError> {
    let mut headers = Vec::new();
    if let Some(params) = creating {
        headers.push((IDEMPOTENCY_KEY_HEADER, resolve_idempotency_key(custom, params)?));
    }
    if let Some(version) = &custom.api_version {
        headers.push((API_VERSION_HEADER, version.clone()));
    }
    headers.extend(custom.routing_headers());
    Ok(headers)
}
