//! Request validation rules.
//!
//! Validators are pure and fail fast: the first violated rule is returned and
//! nothing else is checked. They run before any request is built.

pub mod payment_request;
pub mod payout;

pub use payment_request::{
    PAYMENT_REQUEST_ID_LENGTH, validate_payment_request_id, validate_payment_request_params,
};
pub use payout::{
    PAYOUT_ID_LENGTH, resolve_idempotency_key, validate_payout_id, validate_payout_params,
    validate_payout_reference_id,
};

use serde_json::{Map, Value};

use crate::domain::Amount;
use crate::error::ValidationError;

/// Checks that `value` is between `min` and `max` characters long.
///
/// Absent values pass; presence is enforced separately by the required-field
/// checks. Length is counted in characters, not bytes.
pub fn validate_string_length(
    value: Option<&str>,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    let length = value.chars().count();
    if length < min || length > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}

/// Checks that `value` is exactly `expected` characters long.
pub fn validate_exact_length(
    value: &str,
    field: &'static str,
    expected: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() != expected {
        return Err(ValidationError::ExactLength { field, expected });
    }
    Ok(())
}

/// Checks that an amount is present, a finite number and not negative.
pub fn validate_amount(amount: Option<&Amount>, field: &'static str) -> Result<(), ValidationError> {
    let amount = match amount {
        Some(amount) if amount.is_finite() => amount,
        _ => {
            return Err(ValidationError::Required {
                field,
                expected: "a number",
            });
        }
    };
    if amount.is_negative() {
        return Err(ValidationError::Negative(field));
    }
    Ok(())
}

/// Rejects pass-through keys that collide with a typed field.
///
/// Both would be serialized, and the server keeps the last duplicate key,
/// which would bypass the checks made on the typed value.
pub fn validate_extra_keys(
    extra: &Map<String, Value>,
    typed_fields: &[&str],
    scope: &'static str,
) -> Result<(), ValidationError> {
    match extra.keys().find(|key| typed_fields.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::ReservedExtraKey {
            scope,
            key: key.clone(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn require<'a, T: ?Sized>(
    value: Option<&'a T>,
    field: &'static str,
    expected: &'static str,
) -> Result<&'a T, ValidationError> {
    value.ok_or(ValidationError::Required { field, expected })
}

pub(crate) fn require_one_of<T: Copy>(
    value: Option<T>,
    field: &'static str,
    allowed: fn() -> String,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::RequiredOneOf {
        field,
        allowed: allowed(),
    })
}
