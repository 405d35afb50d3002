use crate::domain::ports::{PaymentMethodFactory, SharedPaymentMethodFactory};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// How `register` treats an identifier that is already bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPolicy {
    /// Replace the existing binding.
    #[default]
    Overwrite,
    /// Reject the registration with `PaymentError::DuplicateProvider`.
    Strict,
}

/// Maps provider identifiers to the factory bound to each of them.
///
/// Uses `RwLock<HashMap<..>>` so that dispatches can resolve concurrently
/// while registrations take the write side. Identifiers are matched exactly.
#[derive(Default)]
pub struct ProviderRegistry {
    factories: RwLock<HashMap<String, SharedPaymentMethodFactory>>,
    policy: RegistrationPolicy,
}

impl ProviderRegistry {
    /// Creates an empty registry that overwrites on re-registration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RegistrationPolicy) -> Self {
        Self {
            factories: RwLock::default(),
            policy,
        }
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Binds `factory` to `identifier`.
    ///
    /// The identifier is stored with surrounding whitespace stripped; blank
    /// identifiers are rejected. Under `RegistrationPolicy::Strict` an
    /// identifier that is already bound is rejected as well.
    pub async fn register<F>(&self, identifier: impl Into<String>, factory: F) -> Result<()>
    where
        F: PaymentMethodFactory + 'static,
    {
        self.register_shared(identifier, Arc::new(factory)).await
    }

    pub async fn register_shared(
        &self,
        identifier: impl Into<String>,
        factory: SharedPaymentMethodFactory,
    ) -> Result<()> {
        let identifier = identifier.into().trim().to_string();
        if identifier.is_empty() {
            return Err(PaymentError::ValidationError(
                "Provider identifier must not be empty".to_string(),
            ));
        }

        let mut factories = self.factories.write().await;
        if self.policy == RegistrationPolicy::Strict && factories.contains_key(&identifier) {
            return Err(PaymentError::DuplicateProvider(identifier));
        }
        if factories.insert(identifier.clone(), factory).is_some() {
            tracing::debug!(provider = %identifier, "Replaced payment provider registration");
        } else {
            tracing::debug!(provider = %identifier, "Registered payment provider");
        }
        Ok(())
    }

    /// Returns the factory bound to `identifier`.
    pub async fn resolve(&self, identifier: &str) -> Result<SharedPaymentMethodFactory> {
        let factories = self.factories.read().await;
        factories
            .get(identifier)
            .cloned()
            .ok_or_else(|| PaymentError::UnknownProvider(identifier.to_string()))
    }

    /// Registered identifiers in sorted order.
    pub async fn providers(&self) -> Vec<String> {
        let factories = self.factories.read().await;
        let mut ids: Vec<String> = factories.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub async fn len(&self) -> usize {
        self.factories.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.factories.read().await.is_empty()
    }
}
