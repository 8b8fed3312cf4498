//! Error types for the payments API client.

/// Request parameter violations, detected before any network call.
///
/// Validation is fail-fast: only the first violation is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} is required and should be {expected}")]
    Required {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} is required and should be one of: {allowed}")]
    RequiredOneOf {
        field: &'static str,
        allowed: String,
    },

    #[error("{field} must be one of: {allowed}")]
    NotOneOf {
        field: &'static str,
        allowed: String,
    },

    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must be {expected} characters")]
    ExactLength { field: &'static str, expected: usize },

    #[error("{0} must be greater than or equal to 0")]
    Negative(&'static str),

    #[error("channel_properties must contain {0}")]
    MissingChannelProperty(&'static str),

    #[error("{field} can contain maximum {max} email addresses")]
    TooManyRecipients { field: &'static str, max: usize },

    #[error("metadata can contain maximum {max} keys")]
    TooManyMetadataKeys { max: usize },

    #[error("metadata key '{key}' must be max {max} characters")]
    MetadataKeyTooLong { key: String, max: usize },

    #[error("metadata value for key '{key}' must be max {max} characters")]
    MetadataValueTooLong { key: String, max: usize },

    #[error("Idempotency-key is required in headers")]
    MissingIdempotencyKey,

    /// A pass-through key that would duplicate a typed field on the wire.
    #[error("{scope} cannot set '{key}' as an extra field")]
    ReservedExtraKey { scope: &'static str, key: String },
}

/// Error reported by the API in a non-2xx response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API error: {http_status} {error_code} - {error_message}")]
pub struct ApiError {
    pub http_status: u16,
    /// Platform error code, e.g. `INVALID_CHANNEL`.
    pub error_code: String,
    pub error_message: String,
    /// Field-level details, when the platform sends them.
    pub errors: Option<serde_json::Value>,
}
