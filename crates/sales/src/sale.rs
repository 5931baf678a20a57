use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use siconi_core::{DomainError, DomainResult, Entity, SaleId};

/// Sale line item: product, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    line_no: u32,
    product_code: String,
    description: String,
    quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
}

impl SaleLine {
    pub fn new(
        line_no: u32,
        product_code: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        unit_price: u64,
    ) -> DomainResult<Self> {
        let product_code = product_code.into().trim().to_string();
        if product_code.is_empty() {
            return Err(DomainError::validation("product code must not be blank"));
        }

        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        if unit_price == 0 {
            return Err(DomainError::validation("unit_price must be positive"));
        }

        Ok(Self {
            line_no,
            product_code,
            description: description.into(),
            quantity,
            unit_price,
        })
    }

    pub fn line_no(&self) -> u32 {
        self.line_no
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Quantity × unit price, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        // quantity is validated positive at construction.
        (self.quantity as u64).saturating_mul(self.unit_price)
    }
}

/// Sale header: who, when, total.
///
/// The header is assembled by the view layer before registration; this layer
/// only reads and forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    id: SaleId,
    /// Raw client reference as captured by the view. Usually the numeric
    /// client key, but it may hold a business code or be absent entirely
    /// (anonymous walk-in sale).
    client_ref: Option<String>,
    /// Total in smallest currency unit.
    total: u64,
    sold_at: DateTime<Utc>,
}

impl Sale {
    /// Build a sale header. A blank client reference is treated as absent.
    pub fn new(
        id: SaleId,
        client_ref: Option<String>,
        total: u64,
        sold_at: DateTime<Utc>,
    ) -> Self {
        let client_ref = client_ref
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            id,
            client_ref,
            total,
            sold_at,
        }
    }

    pub fn id_typed(&self) -> SaleId {
        self.id
    }

    pub fn client_ref(&self) -> Option<&str> {
        self.client_ref.as_deref()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Sum of line totals, saturating at `u64::MAX`.
///
/// Used by the view to fill the header total; the registration workflow never
/// recomputes or cross-checks it.
pub fn sale_total(lines: &[SaleLine]) -> u64 {
    lines
        .iter()
        .fold(0u64, |acc, line| acc.saturating_add(line.line_total()))
}

/// Invariant: a sale must carry at least one line item.
pub fn ensure_has_lines(lines: &[SaleLine]) -> DomainResult<()> {
    if lines.is_empty() {
        return Err(DomainError::invariant(
            "sale must contain at least one line item",
        ));
    }
    Ok(())
}
