//! Sale registration workflow.
//!
//! Validate, persist atomically, then issue a receipt. The receipt step runs
//! only after the sale is durably committed and can never undo the commit or
//! change the reported outcome.

use tracing::{debug, error, warn};

use siconi_clients::Client;
use siconi_core::ClientId;
use siconi_receipts::ReceiptGenerator;
use siconi_sales::{Sale, SaleLine, ensure_has_lines};

use crate::store::{ClientStore, SaleStore};

/// Outcome of the best-effort receipt step.
///
/// Deliberately discarded at the `register_sale` boundary: the caller
/// observes only the persistence outcome. Kept as an explicit value so the
/// discard itself is testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptOutcome {
    Issued,
    Failed,
}

/// Orchestrates sale registration against injected collaborators.
///
/// Holds no state between calls; concurrent registrations do not interact at
/// this layer.
pub struct CheckoutService<S, C, R> {
    sales: S,
    clients: C,
    receipts: R,
}

impl<S, C, R> CheckoutService<S, C, R>
where
    S: SaleStore,
    C: ClientStore,
    R: ReceiptGenerator,
{
    pub fn new(sales: S, clients: C, receipts: R) -> Self {
        Self {
            sales,
            clients,
            receipts,
        }
    }

    /// Register a sale.
    ///
    /// Returns whether the sale was committed. Field-level checks beyond the
    /// non-empty-line invariant (prices, product existence) are owned by the
    /// view and the sale store, not this layer. The receipt step cannot flip
    /// the outcome; its failures are logged and swallowed.
    pub fn register_sale(&self, sale: &Sale, lines: &[SaleLine]) -> bool {
        if let Err(err) = ensure_has_lines(lines) {
            warn!(sale_id = %sale.id_typed(), %err, "sale rejected");
            return false;
        }

        if let Err(err) = self.sales.register_sale(sale, lines) {
            error!(sale_id = %sale.id_typed(), %err, "sale registration failed");
            return false;
        }

        // The sale is committed; receipt issuance is a courtesy from here on.
        let _ = self.issue_receipt(sale, lines);
        true
    }

    /// Best-effort receipt step, run after a successful commit.
    ///
    /// Public so the discard in [`register_sale`](Self::register_sale) can be
    /// asserted directly.
    pub fn issue_receipt(&self, sale: &Sale, lines: &[SaleLine]) -> ReceiptOutcome {
        let client = self.resolve_client(sale);

        match self.receipts.generate(sale, lines, client.as_ref()) {
            Ok(()) => ReceiptOutcome::Issued,
            Err(err) => {
                warn!(sale_id = %sale.id_typed(), %err, "receipt generation failed");
                ReceiptOutcome::Failed
            }
        }
    }

    /// Resolve the sale's raw client reference against the roster.
    ///
    /// Any miss degrades to `None` (anonymous receipt) rather than an error.
    /// The reference may legitimately hold a business code instead of the
    /// numeric key, so a parse failure is expected traffic.
    fn resolve_client(&self, sale: &Sale) -> Option<Client> {
        let raw = sale.client_ref()?;

        let id: ClientId = match raw.parse() {
            Ok(id) => id,
            Err(_) => {
                debug!(
                    sale_id = %sale.id_typed(),
                    client_ref = raw,
                    "client reference is not a numeric key"
                );
                return None;
            }
        };

        let roster = match self.clients.all_clients() {
            Ok(roster) => roster,
            Err(err) => {
                warn!(sale_id = %sale.id_typed(), %err, "client roster unavailable");
                return None;
            }
        };

        roster.into_iter().find(|client| client.id_typed() == id)
    }
}
