//! Established partnerships

use super::day;
use crate::core::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnershipStatus {
    Active,
    Paused,
    Ended,
}

status_enum!(PartnershipStatus {
    Active => "active",
    Paused => "paused",
    Ended => "ended",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partnership {
    pub id: String,
    pub partner_name: String,
    pub partner_role: Role,
    pub status: PartnershipStatus,
    pub category: String,
    pub started_at: DateTime<Utc>,
    /// Revenue generated so far, in account currency
    pub revenue: f64,
}

crate::impl_list_item!(
    Partnership,
    "partnership",
    search: ["partnerName", "category"],
    sort: ["partnerName", "status", "category", "startedAt", "revenue"],
    {
        "partnerName" => partner_name,
        "partnerRole" => partner_role,
        "status" => status,
        "category" => category,
        "startedAt" => started_at,
        "revenue" => revenue,
    }
);

fn partnership(
    id: &str,
    partner_name: &str,
    partner_role: Role,
    status: PartnershipStatus,
    category: &str,
    started_at: DateTime<Utc>,
    revenue: f64,
) -> Partnership {
    Partnership {
        id: id.to_string(),
        partner_name: partner_name.to_string(),
        partner_role,
        status,
        category: category.to_string(),
        started_at,
        revenue,
    }
}

/// Seed partnerships
pub fn sample_partnerships() -> Vec<Partnership> {
    vec![
        partnership(
            "part-001",
            "Urban Basket",
            Role::Retailer,
            PartnershipStatus::Active,
            "Personal Care",
            day(2023, 11, 1),
            18_400.0,
        ),
        partnership(
            "part-002",
            "FreshMart Grocers",
            Role::Retailer,
            PartnershipStatus::Active,
            "Beverages",
            day(2024, 1, 15),
            42_750.0,
        ),
        partnership(
            "part-003",
            "Clearspring Bottling",
            Role::Manufacturer,
            PartnershipStatus::Paused,
            "Beverages",
            day(2023, 8, 20),
            9_120.0,
        ),
        partnership(
            "part-004",
            "Golden Field Snacks",
            Role::Manufacturer,
            PartnershipStatus::Ended,
            "Snacks",
            day(2022, 4, 5),
            27_300.0,
        ),
        partnership(
            "part-005",
            "Greenway",
            Role::Brand,
            PartnershipStatus::Active,
            "Household",
            day(2024, 3, 11),
            5_600.0,
        ),
    ]
}
