use crate::domain::payment::{OrderId, Tax};
use crate::domain::ports::{PaymentMethod, PaymentMethodBox, PaymentMethodFactory};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal_macros::dec;

pub const PAGSEGURO: &str = "pagseguro";

/// PagSeguro payment method (2% rate).
#[derive(Debug, Clone)]
pub struct PagseguroMethod {
    tax: Tax,
    merchant_id: Option<String>,
}

impl PagseguroMethod {
    pub const TAX: Tax = Tax::fixed(dec!(0.02));

    pub fn new(merchant_id: Option<String>) -> Self {
        Self {
            tax: Self::TAX,
            merchant_id,
        }
    }
}

#[async_trait]
impl PaymentMethod for PagseguroMethod {
    fn name(&self) -> &str {
        PAGSEGURO
    }

    fn tax(&self) -> Tax {
        self.tax
    }

    fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }

    async fn create_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = PAGSEGURO,
            order_id = %order_id,
            tax = %self.tax,
            merchant_id = self.merchant_id(),
            "Creating payment order via PagSeguro"
        );
        Ok(true)
    }

    async fn refund_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = PAGSEGURO,
            order_id = %order_id,
            merchant_id = self.merchant_id(),
            "Refunding payment order via PagSeguro"
        );
        Ok(true)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PagseguroFactory {
    merchant_id: Option<String>,
}

impl PagseguroFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merchant_id(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: Some(merchant_id.into()),
        }
    }
}

impl PaymentMethodFactory for PagseguroFactory {
    fn create(&self) -> PaymentMethodBox {
        Box::new(PagseguroMethod::new(self.merchant_id.clone()))
    }
}
