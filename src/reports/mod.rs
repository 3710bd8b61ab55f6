mod dto;
pub mod engine;
pub mod handlers;
pub mod registry;
pub mod table;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
