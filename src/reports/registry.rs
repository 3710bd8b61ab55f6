/// Identifier of one canned aggregate report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportId {
    ProvidersPerCity,
    ReceiversPerCity,
    TopProviderType,
    TopFoodReceiver,
    TotalFoodQuantity,
    TopListingCity,
    CommonFoodTypes,
    ClaimsPerFoodItem,
    TopProviderByCompletedClaims,
    ClaimsStatusDistribution,
    AvgQuantityPerReceiver,
    TopClaimedMealType,
    ProviderDonationTotals,
    UnclaimedFood,
    ReceiverTypeClaims,
    DuplicateListings,
    MultiMealTypeProviders,
    TopListingDays,
    HighAvgQuantityProviders,
    VegOnlyProviders,
    TopCancelledCity,
}

pub struct ReportEntry {
    pub id: ReportId,
    pub slug: &'static str,
    pub title: &'static str,
}

/// Menu order. Presentation order only; recipes do not depend on it.
pub const REGISTRY: &[ReportEntry] = &[
    ReportEntry {
        id: ReportId::ProvidersPerCity,
        slug: "total-providers-per-city",
        title: "Total Providers per City",
    },
    ReportEntry {
        id: ReportId::ReceiversPerCity,
        slug: "total-receivers-per-city",
        title: "Total Receivers per City",
    },
    ReportEntry {
        id: ReportId::TopProviderType,
        slug: "top-contributing-provider-type",
        title: "Top Contributing Provider Type",
    },
    ReportEntry {
        id: ReportId::TopFoodReceiver,
        slug: "top-food-receiver",
        title: "Top Food Receiver",
    },
    ReportEntry {
        id: ReportId::TotalFoodQuantity,
        slug: "total-food-quantity-available",
        title: "Total Quantity of Food Available",
    },
    ReportEntry {
        id: ReportId::TopListingCity,
        slug: "city-with-highest-listings",
        title: "City with Highest Food Listings",
    },
    ReportEntry {
        id: ReportId::CommonFoodTypes,
        slug: "most-common-food-types",
        title: "Most Common Food Types",
    },
    ReportEntry {
        id: ReportId::ClaimsPerFoodItem,
        slug: "claims-per-food-item",
        title: "Claims per Food Item",
    },
    ReportEntry {
        id: ReportId::TopProviderByCompletedClaims,
        slug: "top-provider-by-completed-claims",
        title: "Top Provider by Completed Claims",
    },
    ReportEntry {
        id: ReportId::ClaimsStatusDistribution,
        slug: "claims-status-distribution",
        title: "Claims Status % Distribution",
    },
    ReportEntry {
        id: ReportId::AvgQuantityPerReceiver,
        slug: "average-quantity-claimed-per-receiver",
        title: "Average Quantity Claimed per Receiver",
    },
    ReportEntry {
        id: ReportId::TopClaimedMealType,
        slug: "top-claimed-meal-type",
        title: "Top Claimed Meal Type",
    },
    ReportEntry {
        id: ReportId::ProviderDonationTotals,
        slug: "total-quantity-donated-by-provider",
        title: "Total Quantity Donated by Each Provider",
    },
    ReportEntry {
        id: ReportId::UnclaimedFood,
        slug: "unclaimed-food-items",
        title: "Unclaimed Food Items",
    },
    ReportEntry {
        id: ReportId::ReceiverTypeClaims,
        slug: "receiver-types-with-most-claims",
        title: "Receiver Types with Most Claims",
    },
    ReportEntry {
        id: ReportId::DuplicateListings,
        slug: "duplicate-food-listings",
        title: "Duplicate Food Listings",
    },
    ReportEntry {
        id: ReportId::MultiMealTypeProviders,
        slug: "providers-with-multiple-meal-types",
        title: "Providers with Multiple Meal Types",
    },
    ReportEntry {
        id: ReportId::TopListingDays,
        slug: "top-food-listing-days",
        title: "Top Food Listing Days",
    },
    ReportEntry {
        id: ReportId::HighAvgQuantityProviders,
        slug: "providers-with-avg-quantity-over-10",
        title: "Providers with Avg Quantity > 10",
    },
    ReportEntry {
        id: ReportId::VegOnlyProviders,
        slug: "vegetarian-vegan-only-providers",
        title: "Vegetarian/Vegan Only Providers",
    },
    ReportEntry {
        id: ReportId::TopCancelledCity,
        slug: "city-with-most-cancelled-claims",
        title: "City with Most Cancelled Claims",
    },
];

impl ReportId {
    pub fn from_slug(slug: &str) -> Option<ReportId> {
        REGISTRY.iter().find(|e| e.slug == slug).map(|e| e.id)
    }

    pub fn title(self) -> &'static str {
        REGISTRY
            .iter()
            .find(|e| e.id == self)
            .map(|e| e.title)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn registry_has_twenty_one_reports() {
        assert_eq!(REGISTRY.len(), 21);
    }

    #[test]
    fn slugs_are_unique_and_resolve_back() {
        for entry in REGISTRY {
            assert_eq!(ReportId::from_slug(entry.slug), Some(entry.id));
        }
        let mut slugs: Vec<_> = REGISTRY.iter().map(|e| e.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), REGISTRY.len());
    }

    #[test]
    fn unknown_slug_does_not_resolve() {
        assert_eq!(ReportId::from_slug("weekly-digest"), None);
    }

    #[test]
    fn titles_match_menu_entries() {
        assert_eq!(ReportId::UnclaimedFood.title(), "Unclaimed Food Items");
        assert_eq!(
            ReportId::ClaimsStatusDistribution.title(),
            "Claims Status % Distribution"
        );
    }
}
