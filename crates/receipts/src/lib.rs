//! Receipt generation for completed sales.
//!
//! A receipt is a derived, human-readable artifact; issuing one is a
//! best-effort courtesy that happens after the sale is already committed.
//! This crate owns the receipt model and the generator seam the registration
//! workflow calls through.

pub mod generator;
pub mod receipt;

pub use generator::{FileReceiptWriter, ReceiptError, ReceiptGenerator};
pub use receipt::{Receipt, ReceiptCustomer, ReceiptLine};
