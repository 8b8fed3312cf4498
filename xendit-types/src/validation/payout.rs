//! Payout validation.

use serde_json::{Map, Value};

use super::{
    require, validate_amount, validate_exact_length, validate_extra_keys, validate_string_length,
};
use crate::dto::{
    IDEMPOTENCY_KEY_HEADER, PayoutChannelProperties, PayoutParams, ReceiptNotification,
    RequestHeaders,
};
use crate::error::ValidationError;

/// Length of a payout identifier (`disb-` followed by 24 characters).
pub const PAYOUT_ID_LENGTH: usize = 29;

pub const MAX_RECEIPT_RECIPIENTS: usize = 3;
pub const MAX_METADATA_KEYS: usize = 50;
pub const MAX_METADATA_KEY_LENGTH: usize = 40;
pub const MAX_METADATA_VALUE_LENGTH: usize = 500;

pub fn validate_payout_id(payout_id: &str) -> Result<(), ValidationError> {
    validate_exact_length(payout_id, "payout_id", PAYOUT_ID_LENGTH)
}

/// Reference lookups only need a non-empty reference.
pub fn validate_payout_reference_id(reference_id: &str) -> Result<(), ValidationError> {
    if reference_id.is_empty() {
        return Err(ValidationError::Required {
            field: "reference_id",
            expected: "a string",
        });
    }
    Ok(())
}

/// Validates payout creation parameters.
///
/// Core fields are checked first, then the destination account, then the
/// optional fields that are present.
pub fn validate_payout_params(params: &PayoutParams) -> Result<(), ValidationError> {
    validate_extra_keys(&params.extra, PayoutParams::FIELDS, "payout_params")?;
    let properties = validate_core_fields(params)?;
    validate_channel_properties(properties)?;
    validate_optional_fields(params)
}

/// Picks the idempotency key for a payout creation call.
///
/// An explicit header wins over the payout's `reference_id`.
pub fn resolve_idempotency_key(
    headers: &RequestHeaders,
    params: &PayoutParams,
) -> Result<String, ValidationError> {
    let key = headers
        .idempotency_key
        .as_deref()
        .or(params.reference_id.as_deref())
        .ok_or(ValidationError::MissingIdempotencyKey)?;
    validate_string_length(Some(key), IDEMPOTENCY_KEY_HEADER, 1, 100)?;
    Ok(key.to_string())
}

fn validate_core_fields(params: &PayoutParams) -> Result<&PayoutChannelProperties, ValidationError> {
    let reference_id = require(params.reference_id.as_deref(), "reference_id", "a string")?;
    validate_string_length(Some(reference_id), "reference_id", 1, 255)?;

    require(params.channel_code.as_deref(), "channel_code", "a string")?;
    let properties = require(
        params.channel_properties.as_ref(),
        "channel_properties",
        "an object",
    )?;
    validate_amount(params.amount.as_ref(), "amount")?;
    require(params.currency.as_deref(), "currency", "a string")?;
    Ok(properties)
}

fn validate_channel_properties(properties: &PayoutChannelProperties) -> Result<(), ValidationError> {
    validate_extra_keys(
        &properties.extra,
        PayoutChannelProperties::FIELDS,
        "channel_properties",
    )?;
    if properties.account_holder_name.is_none() {
        return Err(ValidationError::MissingChannelProperty("account_holder_name"));
    }
    if properties.account_number.is_none() {
        return Err(ValidationError::MissingChannelProperty("account_number"));
    }

    validate_string_length(
        properties.account_holder_name.as_deref(),
        "channel_properties.account_holder_name",
        1,
        100,
    )?;
    validate_string_length(
        properties.account_number.as_deref(),
        "channel_properties.account_number",
        1,
        100,
    )?;

    // account_type is checked when it is parsed into an AccountType.
    Ok(())
}

fn validate_optional_fields(params: &PayoutParams) -> Result<(), ValidationError> {
    validate_string_length(params.description.as_deref(), "description", 1, 100)?;
    if let Some(notification) = &params.receipt_notification {
        validate_receipt_notification(notification)?;
    }
    if let Some(metadata) = &params.metadata {
        validate_metadata(metadata)?;
    }
    Ok(())
}

fn validate_receipt_notification(notification: &ReceiptNotification) -> Result<(), ValidationError> {
    let lists = [
        ("email_to", &notification.email_to),
        ("email_cc", &notification.email_cc),
        ("email_bcc", &notification.email_bcc),
    ];
    for (field, addresses) in lists {
        if addresses
            .as_ref()
            .is_some_and(|list| list.len() > MAX_RECEIPT_RECIPIENTS)
        {
            return Err(ValidationError::TooManyRecipients {
                field,
                max: MAX_RECEIPT_RECIPIENTS,
            });
        }
    }
    Ok(())
}

/// Checks metadata size limits: key count, key length and the length of each
/// value's text form.
pub fn validate_metadata(metadata: &Map<String, Value>) -> Result<(), ValidationError> {
    if metadata.len() > MAX_METADATA_KEYS {
        return Err(ValidationError::TooManyMetadataKeys {
            max: MAX_METADATA_KEYS,
        });
    }

    for (key, value) in metadata {
        if key.chars().count() > MAX_METADATA_KEY_LENGTH {
            return Err(ValidationError::MetadataKeyTooLong {
                key: key.clone(),
                max: MAX_METADATA_KEY_LENGTH,
            });
        }
        if value_text_length(value) > MAX_METADATA_VALUE_LENGTH {
            return Err(ValidationError::MetadataValueTooLong {
                key: key.clone(),
                max: MAX_METADATA_VALUE_LENGTH,
            });
        }
    }
    Ok(())
}

fn value_text_length(value: &Value) -> usize {
    match value {
        Value::Null => 0,
        Value::String(s) => s.chars().count(),
        other => other.to_string().chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountType, Amount};
    use serde_json::json;

    fn valid_params() -> PayoutParams {
        PayoutParams {
            reference_id: Some("payout-1001".into()),
            channel_code: Some("ID_BCA".into()),
            channel_properties: Some(PayoutChannelProperties::new("Michael Chen", "000000000099")),
            amount: Some(Amount::from(100_000)),
            currency: Some("IDR".into()),
            ..Default::default()
        }
    }

    fn metadata_with_keys(count: usize) -> Map<String, Value> {
        (0..count)
            .map(|i| (format!("key_{i}"), json!(format!("value_{i}"))))
            .collect()
    }

    #[test]
    fn test_valid_payout() {
        assert!(validate_payout_params(&valid_params()).is_ok());
    }

    #[test]
    fn test_decimal_and_zero_amounts_accepted() {
        let mut params = valid_params();
        params.amount = Some(Amount::from(1500.5));
        assert!(validate_payout_params(&params).is_ok());

        params.amount = Some(Amount::from(0));
        assert!(validate_payout_params(&params).is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut params = valid_params();
        params.amount = Some(Amount::from(-100));
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "amount must be greater than or equal to 0");
    }

    #[test]
    fn test_reference_id_length() {
        let mut params = valid_params();
        params.reference_id = Some("r".repeat(256));
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "reference_id must be between 1 and 255 characters");

        params.reference_id = Some(String::new());
        assert!(validate_payout_params(&params).is_err());
    }

    #[test]
    fn test_missing_currency() {
        let mut params = valid_params();
        params.currency = None;
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "currency is required and should be a string");
    }

    #[test]
    fn test_missing_account_holder_name() {
        let mut params = valid_params();
        params.channel_properties = Some(PayoutChannelProperties {
            account_number: Some("000000000099".into()),
            ..Default::default()
        });
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "channel_properties must contain account_holder_name");
    }

    #[test]
    fn test_missing_account_number() {
        let mut params = valid_params();
        params.channel_properties = Some(PayoutChannelProperties {
            account_holder_name: Some("Michael Chen".into()),
            ..Default::default()
        });
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "channel_properties must contain account_number");
    }

    #[test]
    fn test_channel_field_lengths() {
        let mut params = valid_params();
        params.channel_properties = Some(PayoutChannelProperties::new("Michael Chen", "9".repeat(101)));
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "channel_properties.account_number must be between 1 and 100 characters"
        );

        params.channel_properties = Some(PayoutChannelProperties::new("", "000000000099"));
        let err = validate_payout_params(&params).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Length {
                field: "channel_properties.account_holder_name",
                ..
            }
        ));
    }

    #[test]
    fn test_extra_cannot_shadow_typed_fields() {
        let mut params = valid_params();
        params.extra.insert("amount".into(), json!(-500));
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "payout_params cannot set 'amount' as an extra field");

        let mut params = valid_params();
        params.extra.insert("description".into(), json!("d".repeat(500)));
        assert!(matches!(
            validate_payout_params(&params),
            Err(ValidationError::ReservedExtraKey { scope: "payout_params", .. })
        ));
    }

    #[test]
    fn test_channel_extra_cannot_shadow_account_fields() {
        let mut properties = PayoutChannelProperties::new("Michael Chen", "000000000099");
        properties.extra.insert("account_number".into(), json!(""));
        let mut params = valid_params();
        params.channel_properties = Some(properties);
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ReservedExtraKey {
                scope: "channel_properties",
                key: "account_number".into(),
            }
        );
    }

    #[test]
    fn test_unrelated_extra_fields_pass() {
        let mut params = valid_params();
        params.extra.insert("beneficiary_type".into(), json!("INDIVIDUAL"));
        let mut properties = PayoutChannelProperties::new("Michael Chen", "000000000099");
        properties.extra.insert("bank_branch".into(), json!("Jakarta"));
        params.channel_properties = Some(properties);
        assert!(validate_payout_params(&params).is_ok());
    }

    #[test]
    fn test_account_type_accepted() {
        let mut params = valid_params();
        let mut properties = PayoutChannelProperties::new("Sarah Johnson", "081234567890");
        properties.account_type = Some(AccountType::MobileNo);
        params.channel_properties = Some(properties);
        assert!(validate_payout_params(&params).is_ok());
    }

    #[test]
    fn test_description_length() {
        let mut params = valid_params();
        params.description = Some(String::new());
        assert!(validate_payout_params(&params).is_err());

        params.description = Some("December salary payout".into());
        assert!(validate_payout_params(&params).is_ok());
    }

    #[test]
    fn test_receipt_recipients_limit() {
        let addresses = |n: usize| -> Vec<String> {
            (0..n).map(|i| format!("user{i}@example.com")).collect()
        };

        let mut params = valid_params();
        params.receipt_notification = Some(ReceiptNotification {
            email_to: Some(addresses(3)),
            ..Default::default()
        });
        assert!(validate_payout_params(&params).is_ok());

        params.receipt_notification = Some(ReceiptNotification {
            email_to: Some(addresses(4)),
            ..Default::default()
        });
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "email_to can contain maximum 3 email addresses");

        params.receipt_notification = Some(ReceiptNotification {
            email_bcc: Some(addresses(4)),
            ..Default::default()
        });
        assert!(matches!(
            validate_payout_params(&params),
            Err(ValidationError::TooManyRecipients { field: "email_bcc", .. })
        ));
    }

    #[test]
    fn test_metadata_key_count() {
        let mut params = valid_params();
        params.metadata = Some(metadata_with_keys(50));
        assert!(validate_payout_params(&params).is_ok());

        params.metadata = Some(metadata_with_keys(51));
        let err = validate_payout_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "metadata can contain maximum 50 keys");
    }

    #[test]
    fn test_metadata_key_and_value_lengths() {
        let mut metadata = Map::new();
        metadata.insert("k".repeat(41), json!("v"));
        assert!(matches!(
            validate_metadata(&metadata),
            Err(ValidationError::MetadataKeyTooLong { .. })
        ));

        let mut metadata = Map::new();
        metadata.insert("order_id".into(), json!("v".repeat(501)));
        let err = validate_metadata(&metadata).unwrap_err();
        assert_eq!(err.to_string(), "metadata value for key 'order_id' must be max 500 characters");

        let mut metadata = Map::new();
        metadata.insert("k".repeat(40), json!("v".repeat(500)));
        metadata.insert("count".into(), json!(42));
        assert!(validate_metadata(&metadata).is_ok());
    }

    #[test]
    fn test_payout_id_shape() {
        assert!(validate_payout_id(&format!("disb-{}", "a".repeat(24))).is_ok());
        let err = validate_payout_id("short-id").unwrap_err();
        assert_eq!(err.to_string(), "payout_id must be 29 characters");
    }

    #[test]
    fn test_reference_lookup_requires_value() {
        assert!(validate_payout_reference_id("payout-1001").is_ok());
        assert!(validate_payout_reference_id("").is_err());
    }

    #[test]
    fn test_idempotency_key_defaults_to_reference_id() {
        let params = PayoutParams {
            reference_id: Some("R1".into()),
            ..Default::default()
        };
        let key = resolve_idempotency_key(&RequestHeaders::default(), &params).unwrap();
        assert_eq!(key, "R1");
    }

    #[test]
    fn test_explicit_idempotency_key_wins() {
        let params = PayoutParams {
            reference_id: Some("R1".into()),
            ..Default::default()
        };
        let headers = RequestHeaders::new().with_idempotency_key("explicit-key");
        let key = resolve_idempotency_key(&headers, &params).unwrap();
        assert_eq!(key, "explicit-key");
    }

    #[test]
    fn test_idempotency_key_required_and_bounded() {
        let err = resolve_idempotency_key(&RequestHeaders::default(), &PayoutParams::default());
        assert_eq!(err, Err(ValidationError::MissingIdempotencyKey));

        let headers = RequestHeaders::new().with_idempotency_key("k".repeat(101));
        let err = resolve_idempotency_key(&headers, &PayoutParams::default()).unwrap_err();
        assert_eq!(err.to_string(), "Idempotency-key must be between 1 and 100 characters");
    }
}
