use crate::domain::payment::{OrderId, Tax};
use crate::domain::ports::{PaymentMethod, PaymentMethodBox, PaymentMethodFactory};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal_macros::dec;

pub const BOLETO: &str = "boleto";

/// Boleto bancário payment slip (1% rate).
///
/// A paid slip is refunded by bank transfer.
#[derive(Debug, Clone)]
pub struct BoletoMethod {
    tax: Tax,
    merchant_id: Option<String>,
}

impl BoletoMethod {
    pub const TAX: Tax = Tax::fixed(dec!(0.01));

    pub fn new(merchant_id: Option<String>) -> Self {
        Self {
            tax: Self::TAX,
            merchant_id,
        }
    }
}

#[async_trait]
impl PaymentMethod for BoletoMethod {
    fn name(&self) -> &str {
        BOLETO
    }

    fn tax(&self) -> Tax {
        self.tax
    }

    fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }

    async fn create_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = BOLETO,
            order_id = %order_id,
            tax = %self.tax,
            merchant_id = self.merchant_id(),
            "Issuing boleto payment slip"
        );
        Ok(true)
    }

    async fn refund_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = BOLETO,
            order_id = %order_id,
            merchant_id = self.merchant_id(),
            "Refunding boleto via bank transfer"
        );
        Ok(true)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoletoFactory {
    merchant_id: Option<String>,
}

impl BoletoFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merchant_id(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: Some(merchant_id.into()),
        }
    }
}

impl PaymentMethodFactory for BoletoFactory {
    fn create(&self) -> PaymentMethodBox {
        Box::new(BoletoMethod::new(self.merchant_id.clone()))
    }
}
