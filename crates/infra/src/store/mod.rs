//! Persistence boundaries for the controller services.
//!
//! Traits describe what the controllers need from storage without making any
//! storage assumptions; the in-memory implementations back tests and dev.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::{InMemoryClientStore, InMemoryOperatorStore, InMemorySaleStore};
pub use r#trait::{ClientStore, OperatorStore, SaleStore, StoreError};
