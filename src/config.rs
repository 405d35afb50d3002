//! Registry configuration.
//!
//! A JSON document lists which providers to register and under which
//! identifiers. This is the one place that maps a provider kind to its
//! factory; everything downstream resolves by identifier.

use crate::application::registry::{ProviderRegistry, RegistrationPolicy};
use crate::domain::ports::PaymentMethodFactoryBox;
use crate::error::{PaymentError, Result};
use crate::infrastructure::boleto::{BOLETO, BoletoFactory};
use crate::infrastructure::pagseguro::{PAGSEGURO, PagseguroFactory};
use crate::infrastructure::paypal::{PAYPAL, PaypalFactory};
use crate::infrastructure::pix::{PIX, PixFactory};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Paypal,
    Pagseguro,
    Pix,
    Boleto,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Paypal,
        ProviderKind::Pagseguro,
        ProviderKind::Pix,
        ProviderKind::Boleto,
    ];

    /// Canonical identifier of the kind.
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::Paypal => PAYPAL,
            ProviderKind::Pagseguro => PAGSEGURO,
            ProviderKind::Pix => PIX,
            ProviderKind::Boleto => BOLETO,
        }
    }

    pub fn factory(&self, merchant_id: Option<&str>) -> PaymentMethodFactoryBox {
        match self {
            ProviderKind::Paypal => Box::new(
                merchant_id.map_or_else(PaypalFactory::new, PaypalFactory::with_merchant_id),
            ),
            ProviderKind::Pagseguro => Box::new(
                merchant_id.map_or_else(PagseguroFactory::new, PagseguroFactory::with_merchant_id),
            ),
            ProviderKind::Pix => Box::new(
                merchant_id.map_or_else(PixFactory::new, PixFactory::with_merchant_id),
            ),
            ProviderKind::Boleto => Box::new(
                merchant_id.map_or_else(BoletoFactory::new, BoletoFactory::with_merchant_id),
            ),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ProviderConfig {
    pub id: String,
    pub kind: ProviderKind,
    #[serde(default)]
    pub merchant_id: Option<String>,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            id: kind.id().to_string(),
            kind,
            merchant_id: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RegistryConfig {
    #[serde(default)]
    pub strict_registration: bool,
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
}

fn default_providers() -> Vec<ProviderConfig> {
    ProviderKind::ALL.into_iter().map(ProviderConfig::new).collect()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_registration: false,
            providers: default_providers(),
        }
    }
}

impl RegistryConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn policy(&self) -> RegistrationPolicy {
        if self.strict_registration {
            RegistrationPolicy::Strict
        } else {
            RegistrationPolicy::Overwrite
        }
    }

    /// Builds a registry holding one factory per configured provider.
    pub async fn build_registry(&self) -> Result<ProviderRegistry> {
        let registry = ProviderRegistry::with_policy(self.policy());
        for provider in &self.providers {
            let factory = provider.kind.factory(provider.merchant_id.as_deref());
            registry
                .register_shared(provider.id.clone(), Arc::from(factory))
                .await?;
        }
        if registry.is_empty().await {
            return Err(PaymentError::ValidationError(
                "No payment providers configured".to_string(),
            ));
        }
        tracing::info!(
            providers = registry.len().await,
            policy = ?registry.policy(),
            "Payment provider registry ready"
        );
        Ok(registry)
    }
}
