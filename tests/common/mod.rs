#![allow(dead_code)]

use async_trait::async_trait;
use payment_factory::domain::payment::{OrderId, PaymentOperation, Tax};
use payment_factory::domain::ports::{PaymentMethod, PaymentMethodBox, PaymentMethodFactory};
use payment_factory::error::{PaymentError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub instance: usize,
    pub operation: PaymentOperation,
    pub order: String,
}

/// Product that records every call it receives, tagged with the index of
/// the instance that received it.
pub struct RecordingMethod {
    instance: usize,
    tax: Tax,
    journal: Arc<Mutex<Vec<Call>>>,
}

impl RecordingMethod {
    fn record(&self, operation: PaymentOperation, order_id: &OrderId) {
        self.journal.lock().unwrap().push(Call {
            instance: self.instance,
            operation,
            order: order_id.to_string(),
        });
    }
}

#[async_trait]
impl PaymentMethod for RecordingMethod {
    fn name(&self) -> &str {
        "recording"
    }

    fn tax(&self) -> Tax {
        self.tax
    }

    async fn create_payment(&self, order_id: &OrderId) -> Result<bool> {
        self.record(PaymentOperation::Create, order_id);
        Ok(true)
    }

    async fn refund_payment(&self, order_id: &OrderId) -> Result<bool> {
        self.record(PaymentOperation::Refund, order_id);
        Ok(true)
    }
}

#[derive(Default)]
pub struct RecordingFactory {
    created: AtomicUsize,
    journal: Arc<Mutex<Vec<Call>>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn journal(&self) -> Arc<Mutex<Vec<Call>>> {
        self.journal.clone()
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl PaymentMethodFactory for RecordingFactory {
    fn create(&self) -> PaymentMethodBox {
        Box::new(RecordingMethod {
            instance: self.created.fetch_add(1, Ordering::SeqCst),
            tax: Tax::new(dec!(0.03)).unwrap(),
            journal: self.journal.clone(),
        })
    }
}

/// Product whose provider declines every operation.
pub struct DecliningMethod;

#[async_trait]
impl PaymentMethod for DecliningMethod {
    fn name(&self) -> &str {
        "declining"
    }

    fn tax(&self) -> Tax {
        Tax::ZERO
    }

    async fn create_payment(&self, _order_id: &OrderId) -> Result<bool> {
        Ok(false)
    }

    async fn refund_payment(&self, _order_id: &OrderId) -> Result<bool> {
        Ok(false)
    }
}

/// Product whose integration fails on every call.
pub struct FaultyMethod;

#[async_trait]
impl PaymentMethod for FaultyMethod {
    fn name(&self) -> &str {
        "faulty"
    }

    fn tax(&self) -> Tax {
        Tax::ZERO
    }

    async fn create_payment(&self, _order_id: &OrderId) -> Result<bool> {
        Err(PaymentError::ProviderOperation {
            provider: "faulty".to_string(),
            operation: "create".to_string(),
            reason: "gateway timeout".to_string(),
        })
    }

    async fn refund_payment(&self, _order_id: &OrderId) -> Result<bool> {
        Err(PaymentError::ProviderOperation {
            provider: "faulty".to_string(),
            operation: "refund".to_string(),
            reason: "gateway timeout".to_string(),
        })
    }
}

pub fn order(id: &str) -> OrderId {
    OrderId::new(id).unwrap()
}

/// Writes `rows` requests against random built-in providers.
pub fn generate_csv(path: &Path, rows: usize) -> std::result::Result<(), Error> {
    const PROVIDERS: [&str; 4] = ["paypal", "pagseguro", "pix", "boleto"];
    const OPERATIONS: [&str; 2] = ["create", "refund"];

    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["provider", "operation", "order", "amount"])?;

    for i in 1..=rows {
        let provider = PROVIDERS.choose(&mut rng).copied().unwrap_or("paypal");
        let operation = OPERATIONS.choose(&mut rng).copied().unwrap_or("create");
        let order = format!("Order-{i}");
        let amount = rng.gen_range(1..=10_000u32).to_string();
        wtr.write_record([provider, operation, order.as_str(), amount.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
