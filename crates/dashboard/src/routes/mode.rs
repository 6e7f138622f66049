//! Mock/real mode toggle.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::mode::DataMode;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeRequest {
    pub use_real_data: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResponse {
    pub use_real_data: bool,
    pub mode: DataMode,
}

impl From<DataMode> for ModeResponse {
    fn from(mode: DataMode) -> Self {
        Self {
            use_real_data: mode.is_real(),
            mode,
        }
    }
}

/// GET /api/mode
pub async fn show(State(state): State<AppState>) -> Json<ModeResponse> {
    Json(state.mode().into())
}

/// PUT /api/mode
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<ModeRequest>,
) -> Json<ModeResponse> {
    state
        .mode_switch()
        .set(DataMode::from(request.use_real_data));
    Json(state.mode().into())
}
