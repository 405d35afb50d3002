//! Batch CSV interface: payment requests in, payment reports out.

pub mod report_writer;
pub mod request_reader;
