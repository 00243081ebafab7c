//! Concrete list items and their seed data
//!
//! The `sample_*` functions provide the fixed data sets served by the
//! in-memory provider during development and in tests.

use chrono::{DateTime, NaiveDate, Utc};

/// Midnight UTC on the given date; invalid dates fall back to the epoch
pub(crate) fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Implement `Display`, `From<Self> for FieldValue` and lowercase names for a status enum
macro_rules! status_enum {
    ($type:ident { $( $variant:ident => $name:literal ),* $(,)? }) => {
        impl $type {
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $type::$variant => $name, )*
                }
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$type> for $crate::core::field::FieldValue {
            fn from(status: $type) -> Self {
                $crate::core::field::FieldValue::String(status.as_str().to_string())
            }
        }
    };
}

pub mod macros;
pub mod matches;
pub mod order;
pub mod partnership;
pub mod product;

pub use matches::{Match, MatchStatus, sample_matches};
pub use order::{Order, OrderStatus, sample_orders};
pub use partnership::{Partnership, PartnershipStatus, sample_partnerships};
pub use product::{Product, sample_products};
