//! Concrete payment methods and their factories.

pub mod boleto;
pub mod pagseguro;
pub mod paypal;
pub mod pix;
