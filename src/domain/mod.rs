//! Domain layer: payment value objects and the product/creator ports.

pub mod payment;
pub mod ports;
