use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use siconi_clients::Client;
use siconi_core::SaleId;
use siconi_sales::{Sale, SaleLine};

/// Customer block printed on a receipt.
///
/// Client resolution is best-effort; an unresolved reference degrades to an
/// anonymous receipt instead of failing the sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReceiptCustomer {
    Anonymous,
    Known { code: String, name: String },
}

/// One printed receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub description: String,
    pub quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub line_total: u64,
}

/// A generated, human-readable artifact documenting a completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub number: SaleId,
    pub issued_at: DateTime<Utc>,
    pub customer: ReceiptCustomer,
    pub lines: Vec<ReceiptLine>,
    /// Total in smallest currency unit, as recorded on the sale header.
    pub total: u64,
}

impl Receipt {
    /// Assemble a receipt from a committed sale.
    ///
    /// Pure construction; never touches storage. The header total is printed
    /// as-is rather than recomputed from the lines.
    pub fn for_sale(sale: &Sale, lines: &[SaleLine], client: Option<&Client>) -> Self {
        let customer = match client {
            Some(client) => ReceiptCustomer::Known {
                code: client.code().to_string(),
                name: client.name().to_string(),
            },
            None => ReceiptCustomer::Anonymous,
        };

        let lines = lines
            .iter()
            .map(|line| ReceiptLine {
                description: line.description().to_string(),
                quantity: line.quantity(),
                unit_price: line.unit_price(),
                line_total: line.line_total(),
            })
            .collect();

        Self {
            number: sale.id_typed(),
            issued_at: sale.sold_at(),
            customer,
            lines,
            total: sale.total(),
        }
    }

    /// Render as a fixed-width text block.
    pub fn render_text(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        let _ = writeln!(out, "SICONI - SALES RECEIPT");
        let _ = writeln!(out, "receipt no: {}", self.number);
        let _ = writeln!(
            out,
            "issued at:  {}",
            self.issued_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        match &self.customer {
            ReceiptCustomer::Anonymous => {
                let _ = writeln!(out, "customer:   (anonymous)");
            }
            ReceiptCustomer::Known { code, name } => {
                let _ = writeln!(out, "customer:   {name} [{code}]");
            }
        }
        let _ = writeln!(out, "{:-<60}", "");
        for line in &self.lines {
            let _ = writeln!(
                out,
                "{:<28} {:>5} x {:>10} = {:>10}",
                line.description,
                line.quantity,
                format_cents(line.unit_price),
                format_cents(line.line_total),
            );
        }
        let _ = writeln!(out, "{:-<60}", "");
        let _ = writeln!(out, "{:>47} {:>10}", "TOTAL", format_cents(self.total));
        out
    }
}

fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siconi_core::ClientId;

    fn test_sale(client_ref: Option<&str>) -> Sale {
        Sale::new(
            SaleId::new(),
            client_ref.map(str::to_string),
            750,
            Utc::now(),
        )
    }

    fn test_lines() -> Vec<SaleLine> {
        vec![
            SaleLine::new(1, "P-001", "Widget", 2, 250).unwrap(),
            SaleLine::new(2, "P-002", "Gadget", 1, 250).unwrap(),
        ]
    }

    fn test_client() -> Client {
        Client::new(ClientId::new(7), "CL-0007", "Acme Ltd", None, Utc::now()).unwrap()
    }

    #[test]
    fn resolved_client_appears_on_the_receipt() {
        let receipt = Receipt::for_sale(&test_sale(Some("7")), &test_lines(), Some(&test_client()));
        assert_eq!(
            receipt.customer,
            ReceiptCustomer::Known {
                code: "CL-0007".to_string(),
                name: "Acme Ltd".to_string(),
            }
        );
    }

    #[test]
    fn missing_client_yields_an_anonymous_receipt() {
        let receipt = Receipt::for_sale(&test_sale(None), &test_lines(), None);
        assert_eq!(receipt.customer, ReceiptCustomer::Anonymous);
    }

    #[test]
    fn header_total_is_printed_as_recorded() {
        let sale = Sale::new(SaleId::new(), None, 999, Utc::now());
        let receipt = Receipt::for_sale(&sale, &test_lines(), None);
        assert_eq!(receipt.total, 999);
    }

    #[test]
    fn rendered_text_lists_every_line_and_the_total() {
        let receipt = Receipt::for_sale(&test_sale(None), &test_lines(), None);
        let text = receipt.render_text();

        assert!(text.contains("Widget"));
        assert!(text.contains("Gadget"));
        assert!(text.contains("(anonymous)"));
        assert!(text.contains("TOTAL"));
        assert!(text.contains("7.50"));
    }

    #[test]
    fn rendered_text_names_the_resolved_customer() {
        let receipt = Receipt::for_sale(&test_sale(Some("7")), &test_lines(), Some(&test_client()));
        let text = receipt.render_text();
        assert!(text.contains("Acme Ltd [CL-0007]"));
    }

    #[test]
    fn customer_block_serializes_with_a_kind_tag() {
        let json = serde_json::to_value(ReceiptCustomer::Anonymous).unwrap();
        assert_eq!(json["kind"], "anonymous");

        let json = serde_json::to_value(ReceiptCustomer::Known {
            code: "CL-1".to_string(),
            name: "N".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "known");
    }
}
