//! Item trait defining the element shape every list view works with

use crate::core::field::FieldValue;

/// Base trait for every element shown in a list view.
///
/// Products, matches, orders and partnerships all implement it. The trait
/// gives the filter pipeline what it needs without knowing the concrete type:
/// - id: Unique, immutable identifier
/// - searchable_fields: Fields matched by free-text search
/// - sortable_fields: Fields accepted as sort keys
/// - field_value: Dynamic field access
pub trait ListItem: Clone + Send + Sync + 'static {
    /// Singular resource name (e.g., "product", "match")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this item
    fn id(&self) -> &str;

    /// Fields matched case-insensitively by the search box
    fn searchable_fields() -> &'static [&'static str];

    /// Fields the comparator knows how to order by
    fn sortable_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    ///
    /// Returns `None` for unknown fields. Absent optional fields may return
    /// either `None` or `Some(FieldValue::Null)`; both read as undefined.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Check whether `field` is a known sort key for this item type
    fn is_sortable(field: &str) -> bool {
        Self::sortable_fields().contains(&field)
    }

    /// Numeric value of a field, if it is defined and numeric
    fn number(&self, field: &str) -> Option<f64> {
        self.field_value(field).and_then(|v| v.as_f64())
    }

    /// Text value of a field, with undefined fields reading as ""
    fn text(&self, field: &str) -> String {
        self.field_value(field)
            .and_then(|v| v.as_text().map(|t| t.into_owned()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Sample {
        id: String,
        name: String,
        price: f64,
        location: Option<String>,
    }

    impl ListItem for Sample {
        fn resource_name() -> &'static str {
            "sample"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["name", "location"]
        }

        fn sortable_fields() -> &'static [&'static str] {
            &["name", "price"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(self.name.clone().into()),
                "price" => Some(self.price.into()),
                "location" => Some(self.location.clone().into()),
                _ => None,
            }
        }
    }

    fn sample() -> Sample {
        Sample {
            id: "s-1".to_string(),
            name: "Oat Milk".to_string(),
            price: 3.5,
            location: None,
        }
    }

    #[test]
    fn test_is_sortable() {
        assert!(Sample::is_sortable("price"));
        assert!(!Sample::is_sortable("location"));
    }

    #[test]
    fn test_number_and_text_helpers() {
        let item = sample();
        assert_eq!(item.number("price"), Some(3.5));
        assert_eq!(item.number("name"), None);
        assert_eq!(item.text("name"), "Oat Milk");
    }

    #[test]
    fn test_undefined_fields_read_as_empty() {
        let item = sample();
        assert_eq!(item.text("location"), "");
        assert_eq!(item.text("missing"), "");
        assert_eq!(item.number("missing"), None);
    }
}
