use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use siconi_clients::Client;
use siconi_sales::{Sale, SaleLine};

use crate::receipt::Receipt;

/// Receipt generation error.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Formatting/layout failure while producing the artifact.
    #[error("receipt rendering failed: {0}")]
    Render(String),

    /// The artifact could not be written out.
    #[error("receipt could not be written: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces a receipt artifact for a committed sale.
///
/// Implementations may fail (formatting, I/O). Callers on the registration
/// path treat a failure as a recoverable, secondary concern: the sale itself
/// is already durably recorded.
pub trait ReceiptGenerator: Send + Sync {
    fn generate(
        &self,
        sale: &Sale,
        lines: &[SaleLine],
        client: Option<&Client>,
    ) -> Result<(), ReceiptError>;
}

impl<R> ReceiptGenerator for Arc<R>
where
    R: ReceiptGenerator + ?Sized,
{
    fn generate(
        &self,
        sale: &Sale,
        lines: &[SaleLine],
        client: Option<&Client>,
    ) -> Result<(), ReceiptError> {
        (**self).generate(sale, lines, client)
    }
}

/// Writes rendered text receipts into a directory, one file per sale.
#[derive(Debug, Clone)]
pub struct FileReceiptWriter {
    dir: PathBuf,
}

impl FileReceiptWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the receipt for `sale` will be written to.
    pub fn receipt_path(&self, sale: &Sale) -> PathBuf {
        self.dir.join(format!("receipt-{}.txt", sale.id_typed()))
    }
}

impl ReceiptGenerator for FileReceiptWriter {
    fn generate(
        &self,
        sale: &Sale,
        lines: &[SaleLine],
        client: Option<&Client>,
    ) -> Result<(), ReceiptError> {
        let rendered = Receipt::for_sale(sale, lines, client).render_text();

        fs::create_dir_all(&self.dir)?;
        let path = self.receipt_path(sale);
        fs::write(&path, rendered)?;

        debug!(path = %path.display(), "receipt written");
        Ok(())
    }
}
