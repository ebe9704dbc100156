use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::Json;

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::receipt::{PointsResponse, ProcessResponse, Receipt};
use crate::scoring::{calculate_points, validate_receipt};

/// `POST /receipts/process`
///
/// The body is decoded by hand so that any content type is accepted and
/// decode failures map onto our own error bodies.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let body = body.map_err(|e| {
        tracing::error!(error = %e, "Failed to read request body");
        ApiError::UnreadableBody(e.to_string())
    })?;
    tracing::debug!(data = %String::from_utf8_lossy(&body), "Receipt data received");

    let mut receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse JSON");
        ApiError::MalformedRequestBody(e.to_string())
    })?;

    let result = match validate_receipt(&receipt) {
        Ok(valid) => calculate_points(&valid),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid receipt data");
            return Err(e.into());
        }
    };

    for contribution in &result.breakdown {
        tracing::debug!(
            rule = contribution.rule.label(),
            points = contribution.points,
            "{}",
            contribution.description
        );
    }
    tracing::info!(points = result.points, "Points calculated");

    receipt.points = Some(result.points);
    let id = state.store.put(receipt);
    tracing::info!(%id, points = result.points, "Receipt processed");

    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    tracing::info!(%id, "Getting points for receipt");

    let Some(receipt) = state.store.get(&id) else {
        tracing::warn!(%id, "Receipt not found");
        return Err(ApiError::NotFound(id));
    };

    // Stored receipts are always scored before they are stored
    let points = receipt.points.unwrap_or_default();
    tracing::info!(%id, points, "Returning points");

    Ok(Json(PointsResponse { points }))
}
