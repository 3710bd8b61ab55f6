use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, instrument};

use crate::error::AppError;
use crate::state::AppState;

use super::dto::{FilterOptions, ReportListItem, ReportResponse};
use super::engine;
use super::registry::{ReportId, REGISTRY};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/reports/:slug", get(run_report))
        .route("/filters", get(filter_options))
}

/// The fixed report menu, in presentation order.
#[instrument]
pub async fn list_reports() -> Json<Vec<ReportListItem>> {
    let items = REGISTRY
        .iter()
        .map(|e| ReportListItem {
            slug: e.slug,
            title: e.title,
        })
        .collect();
    Json(items)
}

#[instrument(skip(state))]
pub async fn run_report(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ReportResponse>, (StatusCode, String)> {
    let Some(id) = ReportId::from_slug(&slug) else {
        return Err((
            StatusCode::NOT_FOUND,
            AppError::UnknownReport(slug).to_string(),
        ));
    };

    let tables = state.tables.read().map_err(poisoned)?;
    let table = engine::run(id, &tables);
    tracing::info!(report = %slug, rows = table.rows.len(), "report computed");
    Ok(Json(ReportResponse::new(&slug, id.title(), table)))
}

/// Distinct values backing the city / food type / meal type filter menus.
#[instrument(skip(state))]
pub async fn filter_options(
    State(state): State<AppState>,
) -> Result<Json<FilterOptions>, (StatusCode, String)> {
    let tables = state.tables.read().map_err(poisoned)?;
    Ok(Json(FilterOptions {
        cities: tables.distinct_cities(),
        food_types: tables.distinct_food_types(),
        meal_types: tables.distinct_meal_types(),
    }))
}

fn poisoned<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    error!(error = %e, "table snapshot lock poisoned");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
