//! Domain models for the payments API.

pub mod amount;
pub mod codes;
pub mod credentials;

pub use amount::Amount;
pub use codes::{AccountType, Country, Currency, PaymentRequestType};
pub use credentials::{Credentials, DEFAULT_BASE_URL};
