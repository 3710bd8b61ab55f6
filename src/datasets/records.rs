use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, PrimitiveDateTime};

time::serde::format_description!(date_format, Date, "[year]-[month]-[day]");
time::serde::format_description!(
    timestamp_format,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Provider {
    pub provider_id: String,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Receiver {
    pub receiver_id: String,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
}

/// The one mutable table. Ids are caller-supplied opaque strings and are
/// not checked against `Provider`; quantity carries no enforced bound.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodListing {
    pub food_id: String,
    pub food_name: String,
    pub quantity: i64,
    #[serde(with = "date_format")]
    pub expiry_date: Date,
    pub provider_id: String,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Claim {
    pub claim_id: String,
    pub food_id: String,
    pub receiver_id: String,
    pub status: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: PrimitiveDateTime,
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn listing_deserializes_from_json_with_plain_date() {
        let raw = r#"{
            "food_id": "F101",
            "food_name": "Bread",
            "quantity": 12,
            "expiry_date": "2025-03-15",
            "provider_id": "P7",
            "provider_type": "Restaurant",
            "location": "Chennai",
            "food_type": "Vegetarian",
            "meal_type": "Breakfast"
        }"#;
        let listing: FoodListing = serde_json::from_str(raw).expect("listing should parse");
        assert_eq!(listing.food_id, "F101");
        assert_eq!(listing.quantity, 12);
        assert_eq!(listing.expiry_date.to_string(), "2025-03-15");
    }

    #[test]
    fn claim_timestamp_roundtrips() {
        let raw = r#"{
            "claim_id": "C1",
            "food_id": "F101",
            "receiver_id": "R3",
            "status": "Pending",
            "timestamp": "2025-03-05 17:26:00"
        }"#;
        let claim: Claim = serde_json::from_str(raw).expect("claim should parse");
        let back = serde_json::to_string(&claim).expect("claim should serialize");
        assert!(back.contains("2025-03-05 17:26:00"));
    }

    #[test]
    fn provider_type_field_maps_to_kind() {
        let raw = r#"{"provider_id":"P1","name":"Green Basket","type":"Grocery Store","city":"Pune"}"#;
        let provider: Provider = serde_json::from_str(raw).expect("provider should parse");
        assert_eq!(provider.kind, "Grocery Store");
    }
}
