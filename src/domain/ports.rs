use super::payment::{OrderId, Tax};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Contract every concrete payment method satisfies.
///
/// `Ok(false)` means the provider declined the operation; `Err` is an
/// integration fault. Refund preconditions are the caller's responsibility.
#[async_trait]
pub trait PaymentMethod: Send + Sync {
    /// Provider tag of the concrete method.
    fn name(&self) -> &str;
    fn tax(&self) -> Tax;
    /// Merchant account the product operates on, when its factory was given one.
    fn merchant_id(&self) -> Option<&str> {
        None
    }
    async fn create_payment(&self, order_id: &OrderId) -> Result<bool>;
    async fn refund_payment(&self, order_id: &OrderId) -> Result<bool>;
}

/// Creator bound to exactly one `PaymentMethod` variant.
///
/// Every call to `create` returns a fresh, independently owned product.
pub trait PaymentMethodFactory: Send + Sync {
    fn create(&self) -> PaymentMethodBox;
}

impl<F> PaymentMethodFactory for F
where
    F: Fn() -> PaymentMethodBox + Send + Sync,
{
    fn create(&self) -> PaymentMethodBox {
        self()
    }
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;
pub type PaymentMethodFactoryBox = Box<dyn PaymentMethodFactory>;
pub type SharedPaymentMethodFactory = Arc<dyn PaymentMethodFactory>;
