//! Analytics summary command.

use chrono::NaiveDate;
use orderflow_core::{AnalyticsQuery, AnalyticsReport};
use orderflow_dashboard::{DataMode, DataService};
use serde::Serialize;

use super::{CommandError, emit_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    #[serde(flatten)]
    report: AnalyticsReport,
    completion_rate: u32,
}

/// Print analytics figures, optionally scoped to one date, as JSON.
pub async fn summary(
    service: &DataService,
    mode: DataMode,
    date: Option<NaiveDate>,
) -> Result<(), CommandError> {
    let query = AnalyticsQuery {
        date,
        ..AnalyticsQuery::default()
    };
    let report = service.analytics(mode, &query).await?;
    emit_json(&Summary {
        completion_rate: report.completion_rate(),
        report,
    })
}
