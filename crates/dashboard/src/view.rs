//! Last-request-wins holder for a query result.
//!
//! A consumer that issues overlapping queries (the date picker changing while
//! a listing is still loading, say) calls [`QueryView::begin`] before each one
//! and [`QueryView::complete`] with the ticket when it resolves. Only the most
//! recently issued ticket may replace the held value; earlier replies are
//! dropped whatever order they arrive in.
//!
//! A failed query leaves the previous value in place and records a message
//! that [`QueryView::take_error`] hands out once.

use std::fmt;

use tracing::warn;

/// Identifies one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// What [`QueryView::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The value was replaced.
    Applied,
    /// A newer query was issued since; the result was dropped.
    Stale,
    /// The latest query failed; the previous value is kept.
    Failed,
}

#[derive(Debug)]
pub struct QueryView<T> {
    latest: u64,
    value: Option<T>,
    error: Option<String>,
    loading: bool,
}

impl<T> Default for QueryView<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            value: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> QueryView<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new query. Any ticket handed out earlier becomes stale.
    pub const fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        Ticket(self.latest)
    }

    /// Deliver the result of the query identified by `ticket`.
    pub fn complete<E: fmt::Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> Outcome {
        if ticket.0 != self.latest {
            warn!(
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale query result"
            );
            return Outcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
                Outcome::Applied
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Most recently applied value.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether the latest issued query has not resolved yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Pending error message, if any. Returns `None` on subsequent calls.
    pub const fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_result_wins_when_older_arrives_last() {
        let mut view: QueryView<&str> = QueryView::new();
        let first = view.begin();
        let second = view.begin();

        assert_eq!(view.complete(second, Ok::<_, String>("B")), Outcome::Applied);
        assert_eq!(view.complete(first, Ok::<_, String>("A")), Outcome::Stale);
        assert_eq!(view.value(), Some(&"B"));
        assert!(!view.is_loading());
    }

    #[test]
    fn test_older_result_arriving_first_is_still_dropped() {
        let mut view: QueryView<&str> = QueryView::new();
        let first = view.begin();
        let second = view.begin();

        assert_eq!(view.complete(first, Ok::<_, String>("A")), Outcome::Stale);
        assert!(view.value().is_none());
        assert!(view.is_loading());
        assert_eq!(view.complete(second, Ok::<_, String>("B")), Outcome::Applied);
        assert_eq!(view.value(), Some(&"B"));
    }

    #[test]
    fn test_failure_keeps_previous_value_and_reports_once() {
        let mut view: QueryView<u32> = QueryView::new();
        let ok = view.begin();
        view.complete(ok, Ok::<_, String>(7));

        let failing = view.begin();
        assert_eq!(
            view.complete(failing, Err("Failed to fetch orders: Bad Gateway")),
            Outcome::Failed
        );
        assert_eq!(view.value(), Some(&7));
        assert_eq!(
            view.take_error().as_deref(),
            Some("Failed to fetch orders: Bad Gateway")
        );
        assert!(view.take_error().is_none());
    }

    #[test]
    fn test_success_clears_pending_error() {
        let mut view: QueryView<u32> = QueryView::new();
        let failing = view.begin();
        view.complete(failing, Err::<u32, _>("boom"));
        let ok = view.begin();
        view.complete(ok, Ok::<_, String>(1));
        assert!(view.take_error().is_none());
    }
}
