use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListingSummary {
    pub food_id: String,
    pub food_name: String,
}

#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub food_id: String,
    pub total_listings: usize,
}

/// `removed` is informational only; the delete endpoint succeeds either way.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub food_id: String,
    pub removed: bool,
}
