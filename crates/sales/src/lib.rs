//! Sales domain module.
//!
//! Sale headers and line items as captured at the point of sale, plus the
//! non-empty-sale invariant. Pure domain logic (no IO, no storage).

pub mod sale;

pub use sale::{Sale, SaleLine, ensure_has_lines, sale_total};
