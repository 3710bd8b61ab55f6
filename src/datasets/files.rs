use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{Claim, Dataset, DatasetProvider, FoodListing, Provider, Receiver};
use crate::error::AppError;

/// Loads the four tables from flat CSV files with header rows matching the
/// relational column names.
pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn read_file<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, AppError> {
        let path = self.dir.join(file_name);
        let file = File::open(&path)
            .map_err(|e| AppError::DataUnavailable(format!("{}: {e}", path.display())))?;
        read_table(file, &path)
    }
}

fn read_table<T: DeserializeOwned>(reader: impl Read, path: &Path) -> Result<Vec<T>, AppError> {
    let mut rdr = csv::Reader::from_reader(reader);
    rdr.deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| AppError::DataUnavailable(format!("{}: {e}", path.display())))
}

#[async_trait]
impl DatasetProvider for CsvProvider {
    async fn load(&self) -> Result<Dataset, AppError> {
        let providers: Vec<Provider> = self.read_file("providers_data.csv")?;
        let receivers: Vec<Receiver> = self.read_file("receivers_data.csv")?;
        let food_listings: Vec<FoodListing> = self.read_file("food_listings_data.csv")?;
        let claims: Vec<Claim> = self.read_file("claims_data.csv")?;

        tracing::info!(
            dir = %self.dir.display(),
            providers = providers.len(),
            receivers = receivers.len(),
            food_listings = food_listings.len(),
            claims = claims.len(),
            "dataset loaded from csv files"
        );

        Ok(Dataset {
            providers,
            receivers,
            food_listings,
            claims,
        })
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn parses_listings_with_header_row() {
        let raw = "\
food_id,food_name,quantity,expiry_date,provider_id,provider_type,location,food_type,meal_type
F1,Rice Bags,25,2025-04-01,P1,Grocery Store,Chennai,Vegetarian,Lunch
F2,Chicken Curry,8,2025-03-20,P2,Restaurant,Pune,Non-Vegetarian,Dinner
";
        let listings: Vec<FoodListing> =
            read_table(raw.as_bytes(), Path::new("food_listings_data.csv"))
                .expect("listings should parse");
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].food_id, "F1");
        assert_eq!(listings[0].quantity, 25);
        assert_eq!(listings[1].expiry_date.to_string(), "2025-03-20");
    }

    #[test]
    fn parses_claims_with_timestamps() {
        let raw = "\
claim_id,food_id,receiver_id,status,timestamp
C1,F1,R1,Completed,2025-03-05 17:26:00
C2,F2,R2,Pending,2025-03-06 09:00:00
";
        let claims: Vec<Claim> =
            read_table(raw.as_bytes(), Path::new("claims_data.csv")).expect("claims should parse");
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].status, "Completed");
    }

    #[test]
    fn malformed_rows_fail_the_whole_load() {
        let raw = "\
claim_id,food_id,receiver_id,status,timestamp
C1,F1,R1,Completed,not-a-timestamp
";
        let result: Result<Vec<Claim>, _> = read_table(raw.as_bytes(), Path::new("claims_data.csv"));
        assert!(matches!(result, Err(AppError::DataUnavailable(_))));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let provider = CsvProvider::new(PathBuf::from("/nonexistent-dir"));
        let result: Result<Vec<Provider>, _> = provider.read_file("providers_data.csv");
        assert!(matches!(result, Err(AppError::DataUnavailable(_))));
    }
}
