use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use paradise_core::{BookingForm, BookingOutcome};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub status: &'static str,
    pub booking_id: Option<i32>,
    pub message: String,
}

impl From<&BookingOutcome> for BookingResponse {
    fn from(outcome: &BookingOutcome) -> Self {
        BookingResponse {
            status: if outcome.is_confirmed() { "confirmed" } else { "failed" },
            booking_id: outcome.booking_id(),
            message: outcome.message(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(create_booking))
}

/// Accepts the raw booking form. Item IDs that are not plain digits are
/// dropped rather than rejected; only a body that is not a JSON object fails.
async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingForm>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let Json(form) = payload.map_err(|e| AppError::BadRequestError(e.body_text()))?;
    let request = form.into_request();
    info!(selection = ?request.selection, "Booking submitted");

    let outcome = state.bookings.submit(&request).await;
    let status = match outcome {
        BookingOutcome::Confirmed(_) => StatusCode::CREATED,
        BookingOutcome::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    Ok((status, Json(BookingResponse::from(&outcome))))
}
