use super::registry::ProviderRegistry;
use crate::domain::payment::{Amount, OrderId, PaymentOperation};
use crate::domain::ports::{PaymentMethod, PaymentMethodBox};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single payment operation requested by calling code.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub provider: String,
    pub operation: PaymentOperation,
    pub order: OrderId,
    #[serde(default)]
    pub amount: Option<Amount>,
}

/// Outcome of a dispatched request.
///
/// `fee` and `net` are only present when the request carried an amount.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentReport {
    pub provider: String,
    pub operation: PaymentOperation,
    pub order: OrderId,
    pub tax: Decimal,
    pub fee: Option<Decimal>,
    pub net: Option<Decimal>,
    pub success: bool,
}

/// Routes payment operations to providers by identifier.
///
/// Every dispatch resolves the factory, builds a fresh product and drops it
/// once the operation returns, so no product is ever shared between calls.
/// Adding a provider only requires a new registration.
#[derive(Clone)]
pub struct PaymentDispatcher {
    registry: Arc<ProviderRegistry>,
}

impl PaymentDispatcher {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Creates a payment for `order_id` through `provider`.
    pub async fn dispatch_create(&self, provider: &str, order_id: &OrderId) -> Result<bool> {
        let method = self.product(provider).await?;
        self.run(method.as_ref(), PaymentOperation::Create, order_id)
            .await
    }

    /// Refunds `order_id` through `provider`.
    ///
    /// Whether a payment was created for the order beforehand is not checked.
    pub async fn dispatch_refund(&self, provider: &str, order_id: &OrderId) -> Result<bool> {
        let method = self.product(provider).await?;
        self.run(method.as_ref(), PaymentOperation::Refund, order_id)
            .await
    }

    /// Dispatches `request` and reports the provider's tax and the resulting
    /// fee and net amount.
    pub async fn process_request(&self, request: PaymentRequest) -> Result<PaymentReport> {
        let method = self.product(&request.provider).await?;
        let tax = method.tax();
        let success = self
            .run(method.as_ref(), request.operation, &request.order)
            .await?;

        Ok(PaymentReport {
            provider: request.provider,
            operation: request.operation,
            order: request.order,
            tax: tax.rate(),
            fee: request.amount.map(|amount| tax.fee(amount)),
            net: request.amount.map(|amount| tax.net(amount)),
            success,
        })
    }

    async fn product(&self, provider: &str) -> Result<PaymentMethodBox> {
        let factory = self.registry.resolve(provider).await?;
        let method = factory.create();
        tracing::debug!(provider, variant = method.name(), "Resolved payment method");
        Ok(method)
    }

    async fn run(
        &self,
        method: &dyn PaymentMethod,
        operation: PaymentOperation,
        order_id: &OrderId,
    ) -> Result<bool> {
        let success = match operation {
            PaymentOperation::Create => method.create_payment(order_id).await?,
            PaymentOperation::Refund => method.refund_payment(order_id).await?,
        };
        if !success {
            tracing::warn!(
                provider = method.name(),
                operation = %operation,
                order_id = %order_id,
                "Payment provider declined operation"
            );
        }
        Ok(success)
    }
}
