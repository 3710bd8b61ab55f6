//! The canned aggregations. Each recipe is a pure function of the current
//! table snapshot; joins tolerate dangling foreign keys by dropping the row
//! (or, for the anti-join, by left-anchoring on listings).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::datasets::{Dataset, FoodListing, Provider, Receiver};
use crate::error::AppError;

use super::registry::ReportId;
use super::table::{Cell, ResultTable};

pub fn run_slug(slug: &str, data: &Dataset) -> Result<ResultTable, AppError> {
    let id = ReportId::from_slug(slug).ok_or_else(|| AppError::UnknownReport(slug.to_owned()))?;
    Ok(run(id, data))
}

pub fn run(id: ReportId, data: &Dataset) -> ResultTable {
    match id {
        ReportId::ProvidersPerCity => providers_per_city(data),
        ReportId::ReceiversPerCity => receivers_per_city(data),
        ReportId::TopProviderType => top_provider_type(data),
        ReportId::TopFoodReceiver => top_food_receiver(data),
        ReportId::TotalFoodQuantity => total_food_quantity(data),
        ReportId::TopListingCity => top_listing_city(data),
        ReportId::CommonFoodTypes => common_food_types(data),
        ReportId::ClaimsPerFoodItem => claims_per_food_item(data),
        ReportId::TopProviderByCompletedClaims => top_provider_by_completed_claims(data),
        ReportId::ClaimsStatusDistribution => claims_status_distribution(data),
        ReportId::AvgQuantityPerReceiver => avg_quantity_per_receiver(data),
        ReportId::TopClaimedMealType => top_claimed_meal_type(data),
        ReportId::ProviderDonationTotals => provider_donation_totals(data),
        ReportId::UnclaimedFood => unclaimed_food(data),
        ReportId::ReceiverTypeClaims => receiver_type_claims(data),
        ReportId::DuplicateListings => duplicate_listings(data),
        ReportId::MultiMealTypeProviders => multi_meal_type_providers(data),
        ReportId::TopListingDays => top_listing_days(data),
        ReportId::HighAvgQuantityProviders => high_avg_quantity_providers(data),
        ReportId::VegOnlyProviders => veg_only_providers(data),
        ReportId::TopCancelledCity => top_cancelled_city(data),
    }
}

// --- grouping helpers ---

/// Groups in first-encountered key order.
fn group_values<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> V,
) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    for item in items {
        let k = key(&item);
        let v = value(&item);
        match index.get(&k) {
            Some(&slot) => groups[slot].1.push(v),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![v]));
            }
        }
    }
    groups
}

fn count_by<T, K>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> K) -> Vec<(K, i64)>
where
    K: Eq + Hash + Clone,
{
    group_values(items, key, |_| ())
        .into_iter()
        .map(|(k, hits)| (k, hits.len() as i64))
        .collect()
}

/// Stable sort: equal counts keep first-encountered group order.
fn sort_desc<K>(groups: &mut [(K, i64)]) {
    groups.sort_by(|a, b| b.1.cmp(&a.1));
}

fn mean(values: &[i64]) -> f64 {
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn listing_index(data: &Dataset) -> HashMap<&str, &FoodListing> {
    let mut index = HashMap::new();
    for f in &data.food_listings {
        index.entry(f.food_id.as_str()).or_insert(f);
    }
    index
}

fn provider_index(data: &Dataset) -> HashMap<&str, &Provider> {
    let mut index = HashMap::new();
    for p in &data.providers {
        index.entry(p.provider_id.as_str()).or_insert(p);
    }
    index
}

fn receiver_index(data: &Dataset) -> HashMap<&str, &Receiver> {
    let mut index = HashMap::new();
    for r in &data.receivers {
        index.entry(r.receiver_id.as_str()).or_insert(r);
    }
    index
}

fn counted_table(columns: Vec<&'static str>, groups: Vec<(String, i64)>) -> ResultTable {
    let mut table = ResultTable::new(columns);
    for (key, count) in groups {
        table.push_row(vec![key.into(), count.into()]);
    }
    table
}

// --- recipes ---

fn providers_per_city(data: &Dataset) -> ResultTable {
    let mut groups = count_by(data.providers.iter(), |p| p.city.clone());
    sort_desc(&mut groups);
    counted_table(vec!["city", "total_providers"], groups)
}

fn receivers_per_city(data: &Dataset) -> ResultTable {
    let mut groups = count_by(data.receivers.iter(), |r| r.city.clone());
    sort_desc(&mut groups);
    counted_table(vec!["city", "total_receivers"], groups)
}

fn top_provider_type(data: &Dataset) -> ResultTable {
    let mut groups = count_by(data.providers.iter(), |p| p.kind.clone());
    sort_desc(&mut groups);
    groups.truncate(1);
    counted_table(vec!["type", "count"], groups)
}

fn top_food_receiver(data: &Dataset) -> ResultTable {
    let receivers = receiver_index(data);
    let mut groups = count_by(
        data.claims
            .iter()
            .filter_map(|c| receivers.get(c.receiver_id.as_str())),
        |r| r.name.clone(),
    );
    sort_desc(&mut groups);
    groups.truncate(1);
    counted_table(vec!["receiver_name", "total_claims"], groups)
}

fn total_food_quantity(data: &Dataset) -> ResultTable {
    let total: i64 = data.food_listings.iter().map(|f| f.quantity).sum();
    let mut table = ResultTable::new(vec!["total_quantity"]);
    table.push_row(vec![total.into()]);
    table
}

fn top_listing_city(data: &Dataset) -> ResultTable {
    let mut groups = count_by(data.food_listings.iter(), |f| f.location.clone());
    sort_desc(&mut groups);
    groups.truncate(1);
    counted_table(vec!["city", "total_listings"], groups)
}

fn common_food_types(data: &Dataset) -> ResultTable {
    let mut groups = count_by(data.food_listings.iter(), |f| f.food_type.clone());
    sort_desc(&mut groups);
    groups.truncate(2);
    counted_table(vec!["food_type", "count"], groups)
}

fn claims_per_food_item(data: &Dataset) -> ResultTable {
    let listings = listing_index(data);
    let groups = count_by(
        data.claims
            .iter()
            .filter_map(|c| listings.get(c.food_id.as_str())),
        |f| f.food_name.clone(),
    );
    counted_table(vec!["food_name", "number_of_claims"], groups)
}

fn top_provider_by_completed_claims(data: &Dataset) -> ResultTable {
    let listings = listing_index(data);
    let providers = provider_index(data);
    let mut groups = count_by(
        data.claims
            .iter()
            .filter(|c| c.status == "Completed")
            .filter_map(|c| listings.get(c.food_id.as_str()))
            .filter_map(|f| providers.get(f.provider_id.as_str())),
        |p| p.name.clone(),
    );
    sort_desc(&mut groups);
    groups.truncate(1);
    counted_table(vec!["name", "successful_claims"], groups)
}

fn claims_status_distribution(data: &Dataset) -> ResultTable {
    let total = data.claims.len();
    let groups = count_by(data.claims.iter(), |c| c.status.clone());
    let mut table = ResultTable::new(vec!["status", "claim_count", "percentage"]);
    for (status, count) in groups {
        let percentage = round2(count as f64 * 100.0 / total as f64);
        table.push_row(vec![status.into(), count.into(), percentage.into()]);
    }
    table
}

fn avg_quantity_per_receiver(data: &Dataset) -> ResultTable {
    let listings = listing_index(data);
    let receivers = receiver_index(data);
    let groups = group_values(
        data.claims.iter().filter_map(|c| {
            let listing = listings.get(c.food_id.as_str())?;
            let receiver = receivers.get(c.receiver_id.as_str())?;
            Some((receiver.name.clone(), listing.quantity))
        }),
        |(name, _)| name.clone(),
        |(_, quantity)| *quantity,
    );
    let mut table = ResultTable::new(vec!["name", "avg_quantity"]);
    for (name, quantities) in groups {
        table.push_row(vec![name.into(), round2(mean(&quantities)).into()]);
    }
    table
}

fn top_claimed_meal_type(data: &Dataset) -> ResultTable {
    let listings = listing_index(data);
    let mut groups = count_by(
        data.claims
            .iter()
            .filter_map(|c| listings.get(c.food_id.as_str())),
        |f| f.meal_type.clone(),
    );
    sort_desc(&mut groups);
    groups.truncate(1);
    counted_table(vec!["meal_type", "count"], groups)
}

fn provider_donation_totals(data: &Dataset) -> ResultTable {
    let providers = provider_index(data);
    let groups = group_values(
        data.food_listings.iter().filter_map(|f| {
            let provider = providers.get(f.provider_id.as_str())?;
            Some((provider.name.clone(), f.quantity))
        }),
        |(name, _)| name.clone(),
        |(_, quantity)| *quantity,
    );
    let mut totals: Vec<(String, i64)> = groups
        .into_iter()
        .map(|(name, quantities)| (name, quantities.iter().sum()))
        .collect();
    sort_desc(&mut totals);
    counted_table(vec!["provider_name", "total_quantity"], totals)
}

fn unclaimed_food(data: &Dataset) -> ResultTable {
    let claimed: HashSet<&str> = data.claims.iter().map(|c| c.food_id.as_str()).collect();
    let mut table = ResultTable::new(vec!["food_name", "food_id"]);
    for f in &data.food_listings {
        if !claimed.contains(f.food_id.as_str()) {
            table.push_row(vec![f.food_name.clone().into(), f.food_id.clone().into()]);
        }
    }
    table
}

fn receiver_type_claims(data: &Dataset) -> ResultTable {
    let receivers = receiver_index(data);
    let mut groups = count_by(
        data.claims
            .iter()
            .filter_map(|c| receivers.get(c.receiver_id.as_str())),
        |r| r.kind.clone(),
    );
    sort_desc(&mut groups);
    counted_table(vec!["type", "total_claims"], groups)
}

fn duplicate_listings(data: &Dataset) -> ResultTable {
    let groups = count_by(data.food_listings.iter(), |f| {
        (f.food_name.clone(), f.provider_id.clone())
    });
    let mut table = ResultTable::new(vec!["food_name", "provider_id", "duplicates"]);
    for ((food_name, provider_id), count) in groups {
        if count > 1 {
            table.push_row(vec![food_name.into(), provider_id.into(), count.into()]);
        }
    }
    table
}

fn multi_meal_type_providers(data: &Dataset) -> ResultTable {
    let groups = group_values(
        data.food_listings.iter(),
        |f| f.provider_id.clone(),
        |f| f.meal_type.clone(),
    );
    let mut table = ResultTable::new(vec!["provider_id"]);
    for (provider_id, meal_types) in groups {
        let distinct: HashSet<&String> = meal_types.iter().collect();
        if distinct.len() > 1 {
            table.push_row(vec![provider_id.into()]);
        }
    }
    table
}

fn top_listing_days(data: &Dataset) -> ResultTable {
    let mut groups = count_by(data.food_listings.iter(), |f| f.expiry_date);
    sort_desc(&mut groups);
    groups.truncate(5);
    let mut table = ResultTable::new(vec!["expiry_date", "new_listings"]);
    for (day, count) in groups {
        table.push_row(vec![day.to_string().into(), count.into()]);
    }
    table
}

fn high_avg_quantity_providers(data: &Dataset) -> ResultTable {
    let groups = group_values(
        data.food_listings.iter(),
        |f| f.provider_id.clone(),
        |f| f.quantity,
    );
    let mut table = ResultTable::new(vec!["provider_id", "avg_quantity"]);
    for (provider_id, quantities) in groups {
        let avg = mean(&quantities);
        // strict comparison on the unrounded mean
        if avg > 10.0 {
            table.push_row(vec![provider_id.into(), round2(avg).into()]);
        }
    }
    table
}

fn veg_only_providers(data: &Dataset) -> ResultTable {
    let groups = group_values(
        data.food_listings.iter(),
        |f| f.provider_id.clone(),
        |f| f.food_type.clone(),
    );
    let mut table = ResultTable::new(vec!["provider_id"]);
    for (provider_id, food_types) in groups {
        let distinct: HashSet<&String> = food_types.iter().collect();
        if distinct.len() == 1 {
            let sole = food_types[0].as_str();
            if sole == "Vegetarian" || sole == "Vegan" {
                table.push_row(vec![provider_id.into()]);
            }
        }
    }
    table
}

fn top_cancelled_city(data: &Dataset) -> ResultTable {
    let receivers = receiver_index(data);
    let mut groups = count_by(
        data.claims
            .iter()
            .filter(|c| c.status == "Cancelled")
            .filter_map(|c| receivers.get(c.receiver_id.as_str())),
        |r| r.city.clone(),
    );
    sort_desc(&mut groups);
    groups.truncate(1);
    counted_table(vec!["city", "cancelled_claims"], groups)
}
