//! Print listing and document commands.
//!
//! # Usage
//!
//! ```bash
//! of-cli print list --from 2025-08-01 --to 2025-08-03 --status pending
//! of-cli print document --from 2025-08-01 --to 2025-08-03 --kind invoice --all
//! ```

use orderflow_core::{
    DocumentKind, OrderId, PrintJob, PrintListing, PrintOrdersQuery, PrintSelection,
};
use orderflow_dashboard::{DataMode, DataService};

use super::{CommandError, emit_json, emit_text};

/// Which listed orders go into the document.
pub enum Pick {
    All,
    Ids(Vec<String>),
}

impl Pick {
    /// Resolve against a listing. Ids are taken as given; the print job
    /// rejects any that the listing does not contain.
    fn resolve(self, listing: &PrintListing) -> PrintSelection {
        match self {
            Self::All => {
                let mut selection = PrintSelection::new();
                selection.select_all(listing);
                selection
            }
            Self::Ids(ids) => ids.into_iter().map(OrderId::new).collect(),
        }
    }
}

/// Print the orders eligible for printing as JSON.
pub async fn list(
    service: &DataService,
    mode: DataMode,
    query: &PrintOrdersQuery,
) -> Result<(), CommandError> {
    let listing = service.print_orders(mode, query).await?;
    emit_json(&listing)
}

/// Render a document for the picked orders as plain text.
pub async fn document(
    service: &DataService,
    mode: DataMode,
    query: &PrintOrdersQuery,
    kind: DocumentKind,
    pick: Pick,
) -> Result<(), CommandError> {
    let listing = service.print_orders(mode, query).await?;
    let selection = pick.resolve(&listing);
    let job = PrintJob::new(kind, &selection, &listing)?;
    tracing::info!(kind = %kind, orders = job.lines.len(), "Rendered print document");
    emit_text(&job.render())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use orderflow_core::{OrderStatus, PrintError, PrintOrderLine};

    use super::*;

    fn listing() -> PrintListing {
        let line = |id: &str| PrintOrderLine {
            order_id: OrderId::new(id),
            product_name: "Kitchen Knife Set".to_string(),
            customer_name: "Robert Brown".to_string(),
            status: OrderStatus::Processing,
            order_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        };
        PrintListing {
            orders: vec![line("ORD-1"), line("ORD-2")],
        }
    }

    #[test]
    fn test_pick_all_selects_every_line() {
        let selection = Pick::All.resolve(&listing());
        assert!(selection.is_all_selected(&listing()));
    }

    #[test]
    fn test_pick_unknown_id_is_rejected() {
        let selection = Pick::Ids(vec!["ORD-9".to_string()]).resolve(&listing());
        let err = CommandError::from(
            PrintJob::new(DocumentKind::Invoice, &selection, &listing()).unwrap_err(),
        );
        assert!(matches!(
            err,
            CommandError::Print(PrintError::UnknownSelection(id)) if id.as_str() == "ORD-9"
        ));
    }

    #[test]
    fn test_pick_nothing_yields_empty_selection() {
        let selection = Pick::Ids(Vec::new()).resolve(&listing());
        assert!(selection.is_empty());
    }
}
