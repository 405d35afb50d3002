use payment_factory::application::dispatcher::{PaymentDispatcher, PaymentRequest};
use payment_factory::config::RegistryConfig;
use payment_factory::domain::payment::{Amount, PaymentOperation};
use payment_factory::domain::ports::{PaymentMethodBox, SharedPaymentMethodFactory};
use payment_factory::infrastructure::boleto::BoletoFactory;
use payment_factory::infrastructure::paypal::PaypalFactory;
use rust_decimal_macros::dec;
use std::sync::Arc;

mod common;

#[tokio::test]
async fn test_products_as_trait_objects() {
    let factories: Vec<SharedPaymentMethodFactory> = vec![
        Arc::new(PaypalFactory::new()),
        Arc::new(BoletoFactory::with_merchant_id("cedente-1")),
    ];

    // Verify Send + Sync by spawning tasks
    let handles: Vec<_> = factories
        .into_iter()
        .map(|factory| {
            tokio::spawn(async move {
                let method: PaymentMethodBox = factory.create();
                let ok = method
                    .create_payment(&common::order("Order-01"))
                    .await
                    .unwrap();
                (method.name().to_string(), ok)
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    assert_eq!(
        results,
        vec![("paypal".to_string(), true), ("boleto".to_string(), true)]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_dispatches_share_registry() {
    let registry = RegistryConfig::default().build_registry().await.unwrap();
    let dispatcher = PaymentDispatcher::new(Arc::new(registry));

    let mut handles = Vec::new();
    for i in 0..64u32 {
        let dispatcher = dispatcher.clone();
        handles.push(tokio::spawn(async move {
            let provider = ["paypal", "pagseguro", "pix", "boleto"][(i % 4) as usize];
            let request = PaymentRequest {
                provider: provider.to_string(),
                operation: PaymentOperation::Create,
                order: common::order(&format!("Order-{i}")),
                amount: Some(Amount::new(dec!(100)).unwrap()),
            };
            dispatcher.process_request(request).await.unwrap()
        }));
    }

    for handle in handles {
        let report = handle.await.unwrap();
        assert!(report.success);
        let expected_fee = match report.provider.as_str() {
            "paypal" => dec!(5),
            "pagseguro" => dec!(2),
            "pix" => dec!(0),
            "boleto" => dec!(1),
            other => panic!("unexpected provider {other}"),
        };
        assert_eq!(report.fee, Some(expected_fee));
        assert_eq!(report.net, Some(dec!(100) - expected_fee));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_registration_during_dispatch() {
    let registry = Arc::new(RegistryConfig::default().build_registry().await.unwrap());
    let dispatcher = PaymentDispatcher::new(registry.clone());

    let writer = tokio::spawn({
        let registry = registry.clone();
        async move {
            for i in 0..20 {
                registry
                    .register(format!("paypal-{i}"), PaypalFactory::new())
                    .await
                    .unwrap();
            }
        }
    });

    for i in 0..20 {
        assert!(
            dispatcher
                .dispatch_create("pix", &common::order(&format!("Order-{i}")))
                .await
                .unwrap()
        );
    }

    writer.await.unwrap();
    assert_eq!(registry.len().await, 24);
}
