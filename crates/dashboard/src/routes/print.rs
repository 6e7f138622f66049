//! Print listing and document rendering.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::NaiveDate;
use orderflow_core::{
    DocumentKind, Filter, OrderStatus, PrintError, PrintJob, PrintListing, PrintOrdersQuery,
    PrintSelection, Station,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Request to render one document for a set of selected orders.
///
/// The date range, station and status select the candidate orders exactly as
/// `/api/print-orders` does. Every id in `order_ids` must be one of those
/// candidates.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintDocumentRequest {
    #[serde(default)]
    pub kind: DocumentKind,
    pub order_ids: PrintSelection,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub station: Station,
    #[serde(default)]
    pub status: Option<Filter<OrderStatus>>,
}

impl PrintDocumentRequest {
    fn query(&self) -> PrintOrdersQuery {
        PrintOrdersQuery {
            start_date: self.start_date,
            end_date: self.end_date,
            station: self.station,
            status: self.status,
        }
    }
}

/// POST /api/print-orders
pub async fn list(
    State(state): State<AppState>,
    Json(query): Json<PrintOrdersQuery>,
) -> Result<Json<PrintListing>, AppError> {
    let listing = state.service().print_orders(state.mode(), &query).await?;
    Ok(Json(listing))
}

/// POST /api/print-documents
///
/// Returns the rendered document as `text/plain`.
pub async fn document(
    State(state): State<AppState>,
    Json(request): Json<PrintDocumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.start_date > request.end_date {
        return Err(AppError::BadRequest(
            "startDate must not be after endDate".to_string(),
        ));
    }

    // Fail on an empty pick before spending a round trip on the listing.
    if request.order_ids.is_empty() {
        return Err(PrintError::EmptySelection.into());
    }

    let listing = state
        .service()
        .print_orders(state.mode(), &request.query())
        .await?;
    let job = PrintJob::new(request.kind, &request.order_ids, &listing)?;

    tracing::info!(
        kind = %job.kind,
        orders = job.lines.len(),
        "Rendered print document"
    );

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        job.render(),
    ))
}
