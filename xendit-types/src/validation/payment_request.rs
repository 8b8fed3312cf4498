//! Payment request validation.

use super::{
    require, require_one_of, validate_amount, validate_exact_length, validate_extra_keys,
};
use crate::domain::{Country, Currency, PaymentRequestType};
use crate::dto::PaymentRequestParams;
use crate::error::ValidationError;

/// Length of a payment request identifier (`pr-` followed by a UUID).
pub const PAYMENT_REQUEST_ID_LENGTH: usize = 39;

/// Validates payment request creation parameters.
///
/// `request_amount` is not looked at for reusable payment codes, even when set.
pub fn validate_payment_request_params(params: &PaymentRequestParams) -> Result<(), ValidationError> {
    validate_extra_keys(
        &params.extra,
        PaymentRequestParams::FIELDS,
        "payment_request_params",
    )?;
    require(params.reference_id.as_deref(), "reference_id", "a string")?;
    let request_type = require_one_of(
        params.request_type,
        PaymentRequestType::FIELD,
        PaymentRequestType::allowed,
    )?;
    require_one_of(params.country, Country::FIELD, Country::allowed)?;
    require_one_of(params.currency, Currency::FIELD, Currency::allowed)?;
    require(params.channel_code.as_deref(), "channel_code", "a string")?;
    require(params.channel_properties.as_ref(), "channel_properties", "an object")?;

    if request_type == PaymentRequestType::ReusablePaymentCode {
        return Ok(());
    }
    validate_amount(params.request_amount.as_ref(), "request_amount")
}

pub fn validate_payment_request_id(payment_request_id: &str) -> Result<(), ValidationError> {
    validate_exact_length(
        payment_request_id,
        "payment_request_id",
        PAYMENT_REQUEST_ID_LENGTH,
    )
}
