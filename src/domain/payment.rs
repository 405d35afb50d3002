use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of the order a payment operation applies to.
///
/// Never empty: construction trims the input and rejects blank values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Result<Self, PaymentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PaymentError::ValidationError(
                "Order id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderId {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OrderId {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// Represents a positive monetary amount for payment requests.
///
/// Deserializes from the textual form so that no digits pass through a float.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| PaymentError::ValidationError(format!("Invalid amount {s:?}: {e}")))?;
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Fractional rate a provider charges on each transaction.
///
/// A `Tax` has no mutators; products hand it out by value, so the rate a
/// product was built with is the rate it reports for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Tax(Decimal);

impl Tax {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(rate: Decimal) -> Result<Self, PaymentError> {
        if rate < Decimal::ZERO {
            return Err(PaymentError::ValidationError(
                "Tax rate must not be negative".to_string(),
            ));
        }
        Ok(Self(rate))
    }

    /// Used by built-in providers whose rate is a known non-negative constant.
    pub(crate) const fn fixed(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn rate(&self) -> Decimal {
        self.0
    }

    /// Provider fee for `amount`, rounded to 4 decimal places.
    pub fn fee(&self, amount: Amount) -> Decimal {
        (amount.value() * self.0).round_dp(4).normalize()
    }

    /// What the merchant keeps after the provider fee.
    pub fn net(&self, amount: Amount) -> Decimal {
        (amount.value() - self.fee(amount)).normalize()
    }
}

impl fmt::Display for Tax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOperation {
    Create,
    Refund,
}

impl PaymentOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOperation::Create => "create",
            PaymentOperation::Refund => "refund",
        }
    }
}

impl fmt::Display for PaymentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
