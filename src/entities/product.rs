//! Catalog products listed by manufacturers and brands

use super::day;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    /// Average review score; unrated products have none
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub manufacturer: String,
    pub created_at: DateTime<Utc>,
}

crate::impl_list_item!(
    Product,
    "product",
    search: ["name", "description", "category", "brand"],
    sort: ["name", "price", "stock", "rating", "category", "brand", "createdAt"],
    {
        "name" => name,
        "description" => description,
        "category" => category,
        "brand" => brand,
        "price" => price,
        "stock" => stock,
        "rating" => rating,
        "manufacturer" => manufacturer,
        "createdAt" => created_at,
    }
);

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    brand: &str,
    price: f64,
    stock: u32,
    rating: Option<f64>,
    manufacturer: &str,
    created_at: DateTime<Utc>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
        price,
        stock,
        rating,
        manufacturer: manufacturer.to_string(),
        created_at,
    }
}

/// Seed catalog
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "prod-001",
            "Sparkling Citrus Water",
            "Lightly carbonated water with lemon and lime",
            "Beverages",
            "Fizzwell",
            1.99,
            480,
            Some(4.4),
            "Clearspring Bottling",
            day(2024, 1, 12),
        ),
        product(
            "prod-002",
            "Cold Brew Coffee",
            "Slow-steeped arabica, ready to drink",
            "Beverages",
            "Nightjar",
            4.49,
            210,
            Some(4.7),
            "Roastline Foods",
            day(2024, 2, 3),
        ),
        product(
            "prod-003",
            "Oat Milk Barista Edition",
            "Creamy oat drink that foams for lattes",
            "Beverages",
            "Oatly Fields",
            3.29,
            350,
            Some(4.5),
            "Northern Mills",
            day(2024, 2, 20),
        ),
        product(
            "prod-004",
            "Organic Green Tea",
            "Twenty sachets of first-flush sencha",
            "Beverages",
            "Leafhouse",
            6.75,
            120,
            None,
            "Leafhouse Trading",
            day(2024, 3, 8),
        ),
        product(
            "prod-005",
            "Sea Salt Kettle Chips",
            "Thick-cut potato chips cooked in small batches",
            "Snacks",
            "Crunchcraft",
            2.89,
            600,
            Some(4.2),
            "Golden Field Snacks",
            day(2024, 3, 15),
        ),
        product(
            "prod-006",
            "Dark Chocolate Almonds",
            "Roasted almonds in 70% dark chocolate",
            "Snacks",
            "Cocoa Grove",
            5.99,
            90,
            Some(4.8),
            "Golden Field Snacks",
            day(2024, 4, 1),
        ),
        product(
            "prod-007",
            "Protein Granola Bar",
            "Peanut butter bar with 12g of protein",
            "Snacks",
            "Trailmix Co",
            1.49,
            1200,
            Some(3.9),
            "Northern Mills",
            day(2024, 4, 18),
        ),
        product(
            "prod-008",
            "Eco Dish Soap",
            "Plant-based dish soap, refillable bottle",
            "Household",
            "Greenway",
            3.99,
            300,
            Some(4.1),
            "Brightclean Labs",
            day(2024, 5, 2),
        ),
        product(
            "prod-009",
            "Bamboo Paper Towels",
            "Six rolls of tree-free paper towels",
            "Household",
            "Greenway",
            8.49,
            75,
            None,
            "Brightclean Labs",
            day(2024, 5, 21),
        ),
        product(
            "prod-010",
            "Lavender Hand Soap",
            "Moisturizing liquid soap with essential oils",
            "Personal Care",
            "Meadow & Co",
            4.25,
            260,
            Some(4.6),
            "Brightclean Labs",
            day(2024, 6, 9),
        ),
        product(
            "prod-011",
            "Charcoal Toothpaste",
            "Fluoride toothpaste with activated charcoal",
            "Personal Care",
            "Brightsmile",
            3.49,
            0,
            Some(3.7),
            "Dentaform",
            day(2024, 6, 30),
        ),
        product(
            "prod-012",
            "Kombucha Ginger",
            "Raw fermented tea with fresh ginger",
            "Beverages",
            "Fizzwell",
            3.99,
            140,
            Some(4.3),
            "Clearspring Bottling",
            day(2024, 7, 14),
        ),
    ]
}
