use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::datasets::FoodListing;
use crate::error::AppError;
use crate::state::AppState;

use super::dto::{AddedResponse, DeletedResponse, ListingSummary};
use super::mutator;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/listings", get(list_listings))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/listings", post(add_listing))
        .route("/listings/:food_id", delete(delete_listing))
}

/// id/name pairs for the delete picker.
#[instrument(skip(state))]
pub async fn list_listings(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListingSummary>>, (StatusCode, String)> {
    let tables = state.tables.read().map_err(poisoned)?;
    let items = tables
        .food_listings
        .iter()
        .map(|f| ListingSummary {
            food_id: f.food_id.clone(),
            food_name: f.food_name.clone(),
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, listing))]
pub async fn add_listing(
    State(state): State<AppState>,
    Json(listing): Json<FoodListing>,
) -> Result<(StatusCode, Json<AddedResponse>), (StatusCode, String)> {
    let food_id = listing.food_id.clone();
    let mut tables = state.tables.write().map_err(poisoned)?;
    mutator::add_listing(&mut tables, listing)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    info!(%food_id, total = tables.food_listings.len(), "food listing added");
    Ok((
        StatusCode::CREATED,
        Json(AddedResponse {
            food_id,
            total_listings: tables.food_listings.len(),
        }),
    ))
}

/// Idempotent: deleting an id with no matching listing is still a success;
/// the miss is only logged and reflected in `removed`.
#[instrument(skip(state))]
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
) -> Result<Json<DeletedResponse>, (StatusCode, String)> {
    let mut tables = state.tables.write().map_err(poisoned)?;
    let removed = match mutator::delete_listing(&mut tables, &food_id) {
        Ok(()) => {
            info!(%food_id, "food listing deleted");
            true
        }
        Err(AppError::NotFound(_)) => {
            warn!(%food_id, "nothing to delete");
            false
        }
        Err(e) => return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    };
    Ok(Json(DeletedResponse { food_id, removed }))
}

fn poisoned<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    error!(error = %e, "table snapshot lock poisoned");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
