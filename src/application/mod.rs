//! Application layer: provider registration and dispatch.
//!
//! `ProviderRegistry` maps provider identifiers to factories, and
//! `PaymentDispatcher` turns an identifier plus an order into a call on a
//! freshly created product, without branching on the concrete provider.

pub mod dispatcher;
pub mod registry;
