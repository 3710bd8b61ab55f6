use crate::datasets::{Dataset, FoodListing};
use crate::error::AppError;

/// Appends a caller-supplied record. Fields are taken as-is; ids are not
/// checked against the provider table and empty strings are legal.
pub fn add_listing(tables: &mut Dataset, listing: FoodListing) -> Result<(), AppError> {
    tables.food_listings.push(listing);
    Ok(())
}

/// Removes the first record with a matching food_id. An absent target is
/// reported as `NotFound`; callers that want idempotent-delete semantics
/// treat that case as success.
pub fn delete_listing(tables: &mut Dataset, food_id: &str) -> Result<(), AppError> {
    match tables
        .food_listings
        .iter()
        .position(|f| f.food_id == food_id)
    {
        Some(slot) => {
            tables.food_listings.remove(slot);
            Ok(())
        }
        None => Err(AppError::NotFound(food_id.to_owned())),
    }
}

#[cfg(test)]
mod mutator_tests {
    use std::collections::HashSet;

    use time::macros::date;

    use super::*;

    fn listing(id: &str) -> FoodListing {
        FoodListing {
            food_id: id.into(),
            food_name: "Rice Bags".into(),
            quantity: 10,
            expiry_date: date!(2025 - 04 - 01),
            provider_id: "P1".into(),
            provider_type: "Grocery Store".into(),
            location: "Chennai".into(),
            food_type: "Vegetarian".into(),
            meal_type: "Lunch".into(),
        }
    }

    fn ids(tables: &Dataset) -> HashSet<String> {
        tables
            .food_listings
            .iter()
            .map(|f| f.food_id.clone())
            .collect()
    }

    #[test]
    fn add_then_delete_restores_the_original_collection() {
        let mut tables = Dataset {
            food_listings: vec![listing("F1"), listing("F2")],
            ..Dataset::default()
        };
        let before = ids(&tables);

        add_listing(&mut tables, listing("F999")).expect("add should succeed");
        assert!(ids(&tables).contains("F999"));

        delete_listing(&mut tables, "F999").expect("delete should succeed");
        assert_eq!(ids(&tables), before);
    }

    #[test]
    fn deleting_a_missing_id_leaves_the_collection_unchanged() {
        let mut tables = Dataset {
            food_listings: vec![listing("F1")],
            ..Dataset::default()
        };
        let before = tables.food_listings.len();

        let err = delete_listing(&mut tables, "F404").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(tables.food_listings.len(), before);
    }

    #[test]
    fn delete_removes_only_the_first_match() {
        let mut tables = Dataset {
            food_listings: vec![listing("F1"), listing("F1")],
            ..Dataset::default()
        };
        delete_listing(&mut tables, "F1").expect("delete should succeed");
        assert_eq!(tables.food_listings.len(), 1);
    }

    #[test]
    fn empty_string_ids_are_accepted() {
        let mut tables = Dataset::default();
        add_listing(&mut tables, listing("")).expect("add should succeed");
        assert_eq!(tables.food_listings.len(), 1);
        delete_listing(&mut tables, "").expect("delete should succeed");
        assert!(tables.food_listings.is_empty());
    }
}
