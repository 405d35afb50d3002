use crate::domain::payment::{OrderId, Tax};
use crate::domain::ports::{PaymentMethod, PaymentMethodBox, PaymentMethodFactory};
use crate::error::Result;
use async_trait::async_trait;

pub const PIX: &str = "pix";

/// Pix instant transfer. Pix carries no provider fee.
#[derive(Debug, Clone)]
pub struct PixMethod {
    tax: Tax,
    merchant_id: Option<String>,
}

impl PixMethod {
    pub const TAX: Tax = Tax::ZERO;

    pub fn new(merchant_id: Option<String>) -> Self {
        Self {
            tax: Self::TAX,
            merchant_id,
        }
    }
}

#[async_trait]
impl PaymentMethod for PixMethod {
    fn name(&self) -> &str {
        PIX
    }

    fn tax(&self) -> Tax {
        self.tax
    }

    fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }

    async fn create_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = PIX,
            order_id = %order_id,
            tax = %self.tax,
            merchant_id = self.merchant_id(),
            "Issuing Pix charge"
        );
        Ok(true)
    }

    async fn refund_payment(&self, order_id: &OrderId) -> Result<bool> {
        tracing::info!(
            provider = PIX,
            order_id = %order_id,
            merchant_id = self.merchant_id(),
            "Returning Pix transfer"
        );
        Ok(true)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PixFactory {
    merchant_id: Option<String>,
}

impl PixFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merchant_id(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: Some(merchant_id.into()),
        }
    }
}

impl PaymentMethodFactory for PixFactory {
    fn create(&self) -> PaymentMethodBox {
        Box::new(PixMethod::new(self.merchant_id.clone()))
    }
}
