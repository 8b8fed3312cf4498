//! Data Transfer Objects for requests sent to the API.
//!
//! Fields checked by the validators are `Option`s so that "absent" can be
//! reported as a validation error rather than a compile error. Maps are used
//! only where the API accepts arbitrary keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{AccountType, Amount, Country, Currency, PaymentRequestType};

// ─────────────────────────────────────────────────────────────────────────────
// Request Headers
// ─────────────────────────────────────────────────────────────────────────────

pub const API_VERSION_HEADER: &str = "api-version";
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-key";
pub const FOR_USER_ID_HEADER: &str = "for-user-id";
pub const WITH_SPLIT_RULE_HEADER: &str = "with-split-rule";

/// API version sent with payment request calls unless overridden.
pub const DEFAULT_API_VERSION: &str = "2024-11-11";

/// Optional per-call headers a caller may set.
///
/// Each header has exactly one field here, so there is a single canonical
/// spelling for every header name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Only used by payout creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    /// Sub-account the call is made on behalf of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_user_id: Option<String>,
    /// Split rule applied to the resulting payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_split_rule: Option<String>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    pub fn with_for_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.for_user_id = Some(user_id.into());
        self
    }

    pub fn with_split_rule(mut self, split_rule_id: impl Into<String>) -> Self {
        self.with_split_rule = Some(split_rule_id.into());
        self
    }

    /// Sub-account and split-rule headers, in wire form.
    pub fn routing_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(user_id) = &self.for_user_id {
            headers.push((FOR_USER_ID_HEADER, user_id.clone()));
        }
        if let Some(rule) = &self.with_split_rule {
            headers.push((WITH_SPLIT_RULE_HEADER, rule.clone()));
        }
        headers
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment Request DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for creating a payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequestParams {
    /// Merchant-side identifier for the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub request_type: Option<PaymentRequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Payment channel, e.g. `CARDS` or `PH_GCASH`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_code: Option<String>,
    /// Channel-specific properties, passed through as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_properties: Option<Map<String, Value>>,
    /// Not required for reusable payment codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// `AUTOMATIC` or `MANUAL` capture for card payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Any other field the API accepts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentRequestParams {
    /// Wire names of the typed fields; `extra` must not reuse them.
    pub const FIELDS: &'static [&'static str] = &[
        "reference_id",
        "type",
        "country",
        "currency",
        "channel_code",
        "channel_properties",
        "request_amount",
        "description",
        "customer_id",
        "capture_method",
        "metadata",
    ];

    /// Returns true when no field at all has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payout DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for creating a payout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutParams {
    /// Merchant-side identifier, also the default idempotency key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Destination bank or e-wallet, e.g. `ID_BCA`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_properties: Option<PayoutChannelProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_notification: Option<ReceiptNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Any other field the API accepts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PayoutParams {
    /// Wire names of the typed fields; `extra` must not reuse them.
    pub const FIELDS: &'static [&'static str] = &[
        "reference_id",
        "channel_code",
        "channel_properties",
        "amount",
        "currency",
        "description",
        "receipt_notification",
        "metadata",
    ];

    /// Returns true when no field at all has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Destination account on the payout channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutChannelProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PayoutChannelProperties {
    pub const FIELDS: &'static [&'static str] =
        &["account_holder_name", "account_number", "account_type"];

    pub fn new(account_holder_name: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            account_holder_name: Some(account_holder_name.into()),
            account_number: Some(account_number.into()),
            ..Self::default()
        }
    }
}

/// Email recipients of the payout receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_bcc: Option<Vec<String>>,
}
