mod files;
mod postgres;
mod records;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::config::{AppConfig, DataBackend};
use crate::error::AppError;

pub use files::CsvProvider;
pub use postgres::PostgresProvider;
pub use records::{Claim, FoodListing, Provider, Receiver};

/// In-memory snapshot of the four tables. Loaded once at startup and
/// mutated only through the listing mutator; reports read whatever the
/// snapshot currently holds.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub providers: Vec<Provider>,
    pub receivers: Vec<Receiver>,
    pub food_listings: Vec<FoodListing>,
    pub claims: Vec<Claim>,
}

impl Dataset {
    /// Cities come from the provider table, matching the filter source of
    /// the relational layout.
    pub fn distinct_cities(&self) -> Vec<String> {
        distinct(self.providers.iter().map(|p| p.city.as_str()))
    }

    pub fn distinct_food_types(&self) -> Vec<String> {
        distinct(self.food_listings.iter().map(|f| f.food_type.as_str()))
    }

    pub fn distinct_meal_types(&self) -> Vec<String> {
        distinct(self.food_listings.iter().map(|f| f.meal_type.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(str::to_owned).collect()
}

/// A source the four tables can be loaded from. Loading happens once per
/// session; a provider that cannot produce all four tables fails the whole
/// load.
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    async fn load(&self) -> Result<Dataset, AppError>;
}

pub async fn provider_from_config(
    config: &AppConfig,
) -> Result<Box<dyn DatasetProvider>, AppError> {
    match config.backend {
        DataBackend::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                AppError::DataUnavailable("DATABASE_URL is required for the postgres backend".into())
            })?;
            Ok(Box::new(PostgresProvider::connect(url).await?))
        }
        DataBackend::Files => Ok(Box::new(CsvProvider::new(config.data_dir.clone()))),
    }
}
