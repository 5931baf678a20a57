//! Clients domain module.
//!
//! Customer/account records used for receipt enrichment and the client
//! administration workflow. Pure domain logic (no IO, no storage).

pub mod client;

pub use client::{Client, ContactInfo};
