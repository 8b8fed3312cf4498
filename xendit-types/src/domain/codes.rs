//! Closed enumerations accepted by the API.
//!
//! Every code set is declared through `define_codes!`, which generates the
//! enum, its wire representation and a `FromStr` impl whose error is the
//! same [`ValidationError`] the request validators produce.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// ─────────────────────────────────────────────────────────────────────────────
// Code Set Generation
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! define_codes {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $($variant:ident => $code:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
        #[serde(try_from = "String")]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            /// Name of the request field holding this code.
            pub const FIELD: &'static str = $field;

            /// Returns the wire code.
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),*
                }
            }

            pub fn all() -> &'static [$name] {
                &[$($name::$variant),*]
            }

            /// Comma-separated list of accepted codes, used in error messages.
            pub fn allowed() -> String {
                Self::all()
                    .iter()
                    .map(|c| c.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::all()
                    .iter()
                    .copied()
                    .find(|c| c.code() == s)
                    .ok_or_else(|| ValidationError::NotOneOf {
                        field: $field,
                        allowed: Self::allowed(),
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Code Sets
// ─────────────────────────────────────────────────────────────────────────────

define_codes! {
    /// Kind of payment request.
    PaymentRequestType ("type") {
        Pay => "PAY",
        PayAndSave => "PAY_AND_SAVE",
        ReusablePaymentCode => "REUSABLE_PAYMENT_CODE",
    }
}

define_codes! {
    /// Countries where payment requests can be collected.
    Country ("country") {
        ID => "ID",
        PH => "PH",
        VN => "VN",
        TH => "TH",
        SG => "SG",
        MY => "MY",
    }
}

define_codes! {
    /// Currencies accepted for payment requests.
    Currency ("currency") {
        IDR => "IDR",
        PHP => "PHP",
        VND => "VND",
        THB => "THB",
        SGD => "SGD",
        MYR => "MYR",
        USD => "USD",
    }
}

define_codes! {
    /// Kind of destination account identifier on a payout channel.
    AccountType ("account_type") {
        MobileNo => "MOBILE_NO",
        NationalId => "NATIONAL_ID",
        Passport => "PASSPORT",
        BusinessRegistration => "BUSINESS_REGISTRATION",
        BankAccount => "BANK_ACCOUNT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_parse() {
        assert_eq!("PH".parse::<Country>().unwrap(), Country::PH);
        assert_eq!(
            "REUSABLE_PAYMENT_CODE".parse::<PaymentRequestType>().unwrap(),
            PaymentRequestType::ReusablePaymentCode
        );
    }

    #[test]
    fn test_code_parse_is_case_sensitive() {
        let err = "idr".parse::<Currency>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "currency must be one of: IDR, PHP, VND, THB, SGD, MYR, USD"
        );
    }

    #[test]
    fn test_code_display() {
        assert_eq!(AccountType::BusinessRegistration.to_string(), "BUSINESS_REGISTRATION");
    }

    #[test]
    fn test_code_serde() {
        let json = serde_json::to_string(&PaymentRequestType::PayAndSave).unwrap();
        assert_eq!(json, "\"PAY_AND_SAVE\"");

        let parsed: AccountType = serde_json::from_str("\"MOBILE_NO\"").unwrap();
        assert_eq!(parsed, AccountType::MobileNo);
    }

    #[test]
    fn test_unknown_code_rejected_on_deserialize() {
        let err = serde_json::from_str::<AccountType>("\"EMAIL\"").unwrap_err();
        assert!(err.to_string().contains("account_type must be one of"));
    }

    #[test]
    fn test_code_all() {
        assert_eq!(Country::all().len(), 6);
        assert_eq!(Currency::all().len(), 7);
    }
}
