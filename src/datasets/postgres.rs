use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{Claim, Dataset, DatasetProvider, FoodListing, Provider, Receiver};
use crate::error::AppError;

/// Loads the four tables from the relational layout
/// (`providers_data`, `receivers_data`, `food_listings_data`, `claims_data`).
pub struct PostgresProvider {
    pool: PgPool,
}

impl PostgresProvider {
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        // Run migrations if present
        if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
            tracing::warn!(error = %e, "migrations folder not found or migration failed; continuing");
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl DatasetProvider for PostgresProvider {
    async fn load(&self) -> Result<Dataset, AppError> {
        let providers = sqlx::query_as::<_, Provider>(
            r#"
            SELECT provider_id, name, type, city
            FROM providers_data
            ORDER BY provider_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        let receivers = sqlx::query_as::<_, Receiver>(
            r#"
            SELECT receiver_id, name, type, city
            FROM receivers_data
            ORDER BY receiver_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        let food_listings = sqlx::query_as::<_, FoodListing>(
            r#"
            SELECT food_id, food_name, quantity, expiry_date,
                   provider_id, provider_type, location, food_type, meal_type
            FROM food_listings_data
            ORDER BY food_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        let claims = sqlx::query_as::<_, Claim>(
            r#"
            SELECT claim_id, food_id, receiver_id, status, timestamp
            FROM claims_data
            ORDER BY claim_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DataUnavailable(e.to_string()))?;

        tracing::info!(
            providers = providers.len(),
            receivers = receivers.len(),
            food_listings = food_listings.len(),
            claims = claims.len(),
            "dataset loaded from postgres"
        );

        Ok(Dataset {
            providers,
            receivers,
            food_listings,
            claims,
        })
    }
}
