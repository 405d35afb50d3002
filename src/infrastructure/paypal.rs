use crate::domain::payment::{OrderId, Tax};
use crate::domain::ports::{PaymentMethod, PaymentMethodBox, PaymentMethodFactory};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal_macros::dec;

pub const PAYPAL: &str = "paypal";

/// PayPal payment method.
///
/// Charges a 5% rate on every transaction. The real SDK call is out of scope;
/// the provider round-trip is represented by a structured log event.
#[derive(Debug, Clone)]
pub struct PaypalMethod {
    tax: Tax,
    merchant_id: Option<String>,
}

impl PaypalMethod {
    pub const TAX: Tax = Tax::fixed(dec!(0.05));

    pub fn new(merchant_id: Option<String>) -> Self {
        Self {
            tax: Self::TAX,
            merchant_id,
        }
    }
}

#[async_trait]
impl PaymentMethod for PaypalMethod {
    fn name(&self) -> &str {
        PAYPAL
    }

    fn tax(&self) -> Tax {
        self.tax
    }

    fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }

    async fn create_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = PAYPAL,
            order_id = %order_id,
            tax = %self.tax,
            merchant_id = self.merchant_id(),
            "Creating payment order via PayPal"
        );
        Ok(true)
    }

    async fn refund_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = PAYPAL,
            order_id = %order_id,
            merchant_id = self.merchant_id(),
            "Refunding payment order via PayPal"
        );
        Ok(true)
    }
}

/// Creates `PaypalMethod` products.
///
/// Holds the construction parameters so that call sites never build a
/// `PaypalMethod` themselves.
#[derive(Debug, Clone, Default)]
pub struct PaypalFactory {
    merchant_id: Option<String>,
}

impl PaypalFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merchant_id(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: Some(merchant_id.into()),
        }
    }
}

impl PaymentMethodFactory for PaypalFactory {
    fn create(&self) -> PaymentMethodBox {
        Box::new(PaypalMethod::new(self.merchant_id.clone()))
    }
}
