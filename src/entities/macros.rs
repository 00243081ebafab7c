//! Macros for reducing boilerplate when defining list items
//!
//! Entities are plain serde structs; the macro generates the `ListItem`
//! implementation from the struct's field list.

/// Implement `ListItem` for a struct with a `pub id: String` field
///
/// Every field named in `fields` becomes readable through
/// `ListItem::field_value` under the given name. The field type must convert
/// into `FieldValue` (strings, numbers, booleans, timestamps, options of
/// those, or any type with its own `From` impl such as `Role`).
///
/// # Example
///
/// ```rust,ignore
/// use matchmaker::prelude::*;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Order {
///     pub id: String,
///     pub customer: String,
///     pub total: f64,
/// }
///
/// impl_list_item!(
///     Order,
///     "order",
///     search: ["customer"],
///     sort: ["customer", "total"],
///     {
///         "customer" => customer,
///         "total" => total,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_list_item {
    (
        $type:ident,
        $resource:expr,
        search: [ $( $search_field:expr ),* $(,)? ],
        sort: [ $( $sort_field:expr ),* $(,)? ],
        {
            $( $name:literal => $field:ident ),* $(,)?
        }
    ) => {
        impl $crate::core::entity::ListItem for $type {
            fn resource_name() -> &'static str {
                $resource
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[ $( $search_field ),* ]
            }

            fn sortable_fields() -> &'static [&'static str] {
                &[ $( $sort_field ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    "id" => Some($crate::core::field::FieldValue::String(self.id.clone())),
                    $( $name => Some($crate::core::field::FieldValue::from(
                        ::std::clone::Clone::clone(&self.$field),
                    )), )*
                    _ => None,
                }
            }
        }
    };
}
