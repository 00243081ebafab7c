//! Sort comparator

use super::state::SortDirection;
use crate::core::entity::ListItem;
use std::cmp::Ordering;

/// Compare two items by `sort_by` in `direction`
///
/// Unknown sort keys compare every pair as equal. Undefined values order
/// before defined ones when ascending.
pub fn compare<T: ListItem>(a: &T, b: &T, sort_by: &str, direction: SortDirection) -> Ordering {
    if !T::is_sortable(sort_by) {
        return Ordering::Equal;
    }

    let left = a.field_value(sort_by).filter(|v| !v.is_null());
    let right = b.field_value(sort_by).filter(|v| !v.is_null());

    let ordering = match (left, right) {
        (Some(x), Some(y)) => x.compare(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort; ties keep their input order in both directions
pub fn sort_items<T: ListItem>(items: &mut [T], sort_by: &str, direction: SortDirection) {
    if !T::is_sortable(sort_by) {
        return;
    }
    items.sort_by(|a, b| compare(a, b, sort_by, direction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Clone, Debug)]
    struct Row {
        id: String,
        name: String,
        score: Option<f64>,
        created: DateTime<Utc>,
    }

    impl ListItem for Row {
        fn resource_name() -> &'static str {
            "row"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["name"]
        }

        fn sortable_fields() -> &'static [&'static str] {
            &["name", "score", "created"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(self.name.clone().into()),
                "score" => Some(self.score.into()),
                "created" => Some(self.created.into()),
                _ => None,
            }
        }
    }

    fn row(id: &str, name: &str, score: Option<f64>, day: u32) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            score,
            created: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        }
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_numeric_ascending_and_descending() {
        let a = row("a", "A", Some(5.0), 1);
        let b = row("b", "B", Some(15.0), 1);
        assert_eq!(compare(&a, &b, "score", SortDirection::Asc), Ordering::Less);
        assert_eq!(
            compare(&a, &b, "score", SortDirection::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_strings_locale_like_order() {
        let mut rows = vec![
            row("1", "banana", None, 1),
            row("2", "Apple", None, 1),
            row("3", "cherry", None, 1),
        ];
        sort_items(&mut rows, "name", SortDirection::Asc);
        assert_eq!(ids(&rows), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_dates_chronological() {
        let mut rows = vec![
            row("late", "x", None, 20),
            row("early", "x", None, 2),
            row("mid", "x", None, 10),
        ];
        sort_items(&mut rows, "created", SortDirection::Desc);
        assert_eq!(ids(&rows), vec!["late", "mid", "early"]);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let a = row("a", "Zed", Some(1.0), 1);
        let b = row("b", "Amy", Some(2.0), 1);
        assert_eq!(compare(&a, &b, "nope", SortDirection::Asc), Ordering::Equal);

        let mut rows = vec![a, b];
        sort_items(&mut rows, "nope", SortDirection::Desc);
        assert_eq!(ids(&rows), vec!["a", "b"]);
    }

    #[test]
    fn test_ties_are_stable_both_directions() {
        let input = vec![
            row("t1", "x", Some(10.0), 1),
            row("u", "x", Some(5.0), 1),
            row("t2", "x", Some(10.0), 1),
            row("t3", "x", Some(10.0), 1),
        ];

        let mut asc = input.clone();
        sort_items(&mut asc, "score", SortDirection::Asc);
        assert_eq!(ids(&asc), vec!["u", "t1", "t2", "t3"]);

        let mut desc = input;
        sort_items(&mut desc, "score", SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["t1", "t2", "t3", "u"]);
    }

    #[test]
    fn test_undefined_values_first_when_ascending() {
        let mut rows = vec![
            row("defined", "x", Some(1.0), 1),
            row("missing", "x", None, 1),
        ];
        sort_items(&mut rows, "score", SortDirection::Asc);
        assert_eq!(ids(&rows), vec!["missing", "defined"]);
        sort_items(&mut rows, "score", SortDirection::Desc);
        assert_eq!(ids(&rows), vec!["defined", "missing"]);
    }
}
