//! Print selection and document rendering.
//!
//! The print view lists candidate orders (a [`PrintListing`]), lets the user
//! pick some of them, and turns the pick into a [`PrintJob`] for one
//! [`DocumentKind`].

use core::fmt::{self, Write as _};
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::{PrintListing, PrintOrderLine};
use crate::types::{OrderId, ParseEnumError};

/// Errors raised while building a print job.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// No order was selected.
    #[error("select at least one order to print")]
    EmptySelection,
    /// A selected order is not among the listed candidates.
    #[error("order {0} is not in the print listing")]
    UnknownSelection(OrderId),
}

/// Kind of document to produce for the selected orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    #[default]
    PackingList,
    ShippingLabel,
    Invoice,
    OrderSummary,
    CustomsDeclaration,
}

impl DocumentKind {
    /// Wire name, e.g. `packing-list`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PackingList => "packing-list",
            Self::ShippingLabel => "shipping-label",
            Self::Invoice => "invoice",
            Self::OrderSummary => "order-summary",
            Self::CustomsDeclaration => "customs-declaration",
        }
    }

    /// Heading printed at the top of the document.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PackingList => "Packing List",
            Self::ShippingLabel => "Shipping Labels",
            Self::Invoice => "Invoices",
            Self::OrderSummary => "Order Summary",
            Self::CustomsDeclaration => "Customs Declaration",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "packing-list" => Ok(Self::PackingList),
            "shipping-label" => Ok(Self::ShippingLabel),
            "invoice" => Ok(Self::Invoice),
            "order-summary" => Ok(Self::OrderSummary),
            "customs-declaration" => Ok(Self::CustomsDeclaration),
            _ => Err(ParseEnumError {
                kind: "document kind",
                value: s.to_string(),
            }),
        }
    }
}

/// Orders picked for printing, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrintSelection {
    ids: Vec<OrderId>,
}

impl PrintSelection {
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Add an order; selecting twice is a no-op.
    pub fn select(&mut self, id: OrderId) {
        if !self.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Remove an order if selected.
    pub fn deselect(&mut self, id: &OrderId) {
        self.ids.retain(|selected| selected != id);
    }

    /// Flip the selection state of one order.
    pub fn toggle(&mut self, id: OrderId) {
        if self.contains(&id) {
            self.deselect(&id);
        } else {
            self.ids.push(id);
        }
    }

    /// Replace the selection with every order in `listing`.
    pub fn select_all(&mut self, listing: &PrintListing) {
        self.ids = listing
            .orders
            .iter()
            .map(|line| line.order_id.clone())
            .collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &OrderId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when every listed order is selected and the listing is not empty.
    #[must_use]
    pub fn is_all_selected(&self, listing: &PrintListing) -> bool {
        !listing.orders.is_empty()
            && listing
                .orders
                .iter()
                .all(|line| self.contains(&line.order_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderId> {
        self.ids.iter()
    }
}

impl FromIterator<OrderId> for PrintSelection {
    fn from_iter<I: IntoIterator<Item = OrderId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.select(id);
        }
        selection
    }
}

/// A document ready to be printed or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub kind: DocumentKind,
    pub lines: Vec<PrintOrderLine>,
    pub printed_at: DateTime<Utc>,
}

impl PrintJob {
    /// Build a job from the listed orders that are selected, keeping the
    /// listing order.
    ///
    /// # Errors
    ///
    /// Returns `PrintError::EmptySelection` if nothing is selected and
    /// `PrintError::UnknownSelection` for the first selected id the listing
    /// does not contain.
    pub fn new(
        kind: DocumentKind,
        selection: &PrintSelection,
        listing: &PrintListing,
    ) -> Result<Self, PrintError> {
        if selection.is_empty() {
            return Err(PrintError::EmptySelection);
        }

        if let Some(missing) = selection
            .iter()
            .find(|id| !listing.orders.iter().any(|line| &line.order_id == *id))
        {
            return Err(PrintError::UnknownSelection(missing.clone()));
        }

        let lines = listing
            .orders
            .iter()
            .filter(|line| selection.contains(&line.order_id))
            .cloned()
            .collect();

        Ok(Self {
            kind,
            lines,
            printed_at: Utc::now(),
        })
    }

    /// Override the print timestamp.
    #[must_use]
    pub fn with_printed_at(mut self, at: DateTime<Utc>) -> Self {
        self.printed_at = at;
        self
    }

    /// Render as a plain-text document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.kind.title().to_uppercase());
        let _ = writeln!(out, "Printed: {}", self.printed_at.format("%Y-%m-%d %H:%M UTC"));
        let _ = writeln!(out, "Orders: {}", self.lines.len());
        out.push('\n');
        let _ = writeln!(
            out,
            "{:<14}{:<12}{:<12}{:<20}PRODUCT",
            "ORDER", "DATE", "STATUS", "CUSTOMER"
        );
        for line in &self.lines {
            let _ = writeln!(
                out,
                "{:<14}{:<12}{:<12}{:<20}{}",
                line.order_id.as_str(),
                line.order_date.format("%Y-%m-%d").to_string(),
                line.status.as_str(),
                line.customer_name,
                line.product_name
            );
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;
    use crate::types::OrderStatus;

    fn line(id: &str, customer: &str) -> PrintOrderLine {
        PrintOrderLine {
            order_id: OrderId::new(id),
            product_name: "Yoga Mat".to_string(),
            customer_name: customer.to_string(),
            status: OrderStatus::Pending,
            order_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        }
    }

    fn listing() -> PrintListing {
        PrintListing {
            orders: vec![line("A-1", "Ann"), line("B-2", "Bob"), line("C-3", "Cy")],
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = PrintSelection::new();
        selection.select(OrderId::new("A-1"));
        selection.select(OrderId::new("A-1"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_and_deselect() {
        let mut selection = PrintSelection::new();
        selection.toggle(OrderId::new("A-1"));
        selection.toggle(OrderId::new("B-2"));
        selection.toggle(OrderId::new("A-1"));
        assert!(!selection.contains(&OrderId::new("A-1")));
        selection.deselect(&OrderId::new("B-2"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_and_clear() {
        let listing = listing();
        let mut selection = PrintSelection::new();
        assert!(!selection.is_all_selected(&listing));
        selection.select_all(&listing);
        assert!(selection.is_all_selected(&listing));
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.is_all_selected(&PrintListing::default()));
    }

    #[test]
    fn test_job_requires_selection() {
        let result = PrintJob::new(DocumentKind::Invoice, &PrintSelection::new(), &listing());
        assert_eq!(result.unwrap_err(), PrintError::EmptySelection);
    }

    #[test]
    fn test_job_rejects_ids_outside_listing() {
        let selection: PrintSelection = std::iter::once(OrderId::new("ZZZ")).collect();
        let result = PrintJob::new(DocumentKind::Invoice, &selection, &listing());
        assert_eq!(
            result.unwrap_err(),
            PrintError::UnknownSelection(OrderId::new("ZZZ"))
        );

        let selection: PrintSelection = [OrderId::new("A-1"), OrderId::new("Q-9")]
            .into_iter()
            .collect();
        let err = PrintJob::new(DocumentKind::Invoice, &selection, &listing()).unwrap_err();
        assert_eq!(err.to_string(), "order Q-9 is not in the print listing");
    }

    #[test]
    fn test_job_keeps_listing_order_and_only_selected() {
        let selection: PrintSelection = [OrderId::new("C-3"), OrderId::new("A-1")]
            .into_iter()
            .collect();
        let job = PrintJob::new(DocumentKind::PackingList, &selection, &listing()).unwrap();
        let ids: Vec<&str> = job.lines.iter().map(|l| l.order_id.as_str()).collect();
        assert_eq!(ids, vec!["A-1", "C-3"]);
    }

    #[test]
    fn test_render_packing_list() {
        let selection: PrintSelection = std::iter::once(OrderId::new("B-2")).collect();
        let job = PrintJob::new(DocumentKind::PackingList, &selection, &listing())
            .unwrap()
            .with_printed_at(Utc.with_ymd_and_hms(2025, 8, 2, 9, 30, 0).unwrap());
        let text = job.render();
        assert!(text.starts_with("PACKING LIST\nPrinted: 2025-08-02 09:30 UTC\nOrders: 1\n"));
        assert!(text.contains("B-2"));
        assert!(text.contains("Bob"));
        assert!(!text.contains("Ann"));
    }

    #[test]
    fn test_document_kind_parse() {
        assert_eq!(
            "customs-declaration".parse::<DocumentKind>().unwrap(),
            DocumentKind::CustomsDeclaration
        );
        assert!("receipt".parse::<DocumentKind>().is_err());
        let json = serde_json::to_string(&DocumentKind::ShippingLabel).unwrap();
        assert_eq!(json, "\"shipping-label\"");
    }
}
