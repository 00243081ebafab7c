//! Suggested business matches between partners

use super::day;
use crate::core::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a suggested match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    New,
    Contacted,
    Negotiating,
    Partnered,
    Declined,
}

status_enum!(MatchStatus {
    New => "new",
    Contacted => "contacted",
    Negotiating => "negotiating",
    Partnered => "partnered",
    Declined => "declined",
});

/// A partner suggested to the signed-in business
///
/// `match_score` is provided by the backend as-is; nothing here computes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub partner_name: String,
    pub partner_role: Role,
    #[serde(default)]
    pub location: Option<String>,
    pub category: String,
    pub status: MatchStatus,
    pub match_score: u32,
    pub created_at: DateTime<Utc>,
}

crate::impl_list_item!(
    Match,
    "match",
    search: ["partnerName", "location", "category"],
    sort: ["partnerName", "matchScore", "createdAt", "location", "status"],
    {
        "partnerName" => partner_name,
        "partnerRole" => partner_role,
        "location" => location,
        "category" => category,
        "status" => status,
        "matchScore" => match_score,
        "createdAt" => created_at,
    }
);

#[allow(clippy::too_many_arguments)]
fn suggested(
    id: &str,
    partner_name: &str,
    partner_role: Role,
    location: Option<&str>,
    category: &str,
    status: MatchStatus,
    match_score: u32,
    created_at: DateTime<Utc>,
) -> Match {
    Match {
        id: id.to_string(),
        partner_name: partner_name.to_string(),
        partner_role,
        location: location.map(str::to_string),
        category: category.to_string(),
        status,
        match_score,
        created_at,
    }
}

/// Seed matches
pub fn sample_matches() -> Vec<Match> {
    vec![
        suggested(
            "match-001",
            "FreshMart Grocers",
            Role::Retailer,
            Some("Portland, OR"),
            "Beverages",
            MatchStatus::New,
            92,
            day(2024, 6, 1),
        ),
        suggested(
            "match-002",
            "Cornerstone Pantry",
            Role::Retailer,
            Some("Austin, TX"),
            "Snacks",
            MatchStatus::Contacted,
            85,
            day(2024, 6, 4),
        ),
        suggested(
            "match-003",
            "Clearspring Bottling",
            Role::Manufacturer,
            Some("Denver, CO"),
            "Beverages",
            MatchStatus::Negotiating,
            78,
            day(2024, 6, 10),
        ),
        suggested(
            "match-004",
            "Greenway",
            Role::Brand,
            None,
            "Household",
            MatchStatus::New,
            71,
            day(2024, 6, 12),
        ),
        suggested(
            "match-005",
            "Urban Basket",
            Role::Retailer,
            Some("Brooklyn, NY"),
            "Personal Care",
            MatchStatus::Partnered,
            88,
            day(2024, 6, 18),
        ),
        suggested(
            "match-006",
            "Golden Field Snacks",
            Role::Manufacturer,
            Some("Des Moines, IA"),
            "Snacks",
            MatchStatus::Declined,
            64,
            day(2024, 6, 25),
        ),
        suggested(
            "match-007",
            "Meadow & Co",
            Role::Brand,
            Some("Portland, ME"),
            "Personal Care",
            MatchStatus::Contacted,
            81,
            day(2024, 7, 2),
        ),
    ]
}
