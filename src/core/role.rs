//! Role-based navigation
//!
//! Every signed-in user has exactly one role. What a role may open is decided
//! by a single lookup table (`Role::sections`); nothing else branches on the
//! role to grant access.

use crate::core::error::{MatchmakerError, ValidationError};
use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manufacturer,
    Brand,
    Retailer,
    Admin,
}

/// A navigable area of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Products,
    Analytics,
    Messages,
    Matches,
    Partnerships,
    Orders,
    Settings,
    Users,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Manufacturer, Role::Brand, Role::Retailer, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manufacturer => "manufacturer",
            Role::Brand => "brand",
            Role::Retailer => "retailer",
            Role::Admin => "admin",
        }
    }

    /// Sections this role may open, in navigation order
    pub fn sections(self) -> &'static [Section] {
        use Section::*;
        match self {
            Role::Manufacturer => &[
                Dashboard,
                Products,
                Analytics,
                Messages,
                Matches,
                Partnerships,
                Orders,
                Settings,
            ],
            Role::Brand => &[
                Dashboard,
                Products,
                Analytics,
                Messages,
                Matches,
                Partnerships,
                Settings,
            ],
            Role::Retailer => &[
                Dashboard,
                Products,
                Messages,
                Matches,
                Partnerships,
                Orders,
                Settings,
            ],
            Role::Admin => &[
                Dashboard,
                Products,
                Analytics,
                Messages,
                Matches,
                Partnerships,
                Orders,
                Settings,
                Users,
            ],
        }
    }

    /// Route of the landing page after sign-in
    pub fn dashboard(self) -> String {
        self.route(Section::Dashboard)
    }

    /// Route of `section` under this role's prefix
    pub fn route(self, section: Section) -> String {
        format!("/{}/{}", self.as_str(), section.as_str())
    }
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Products => "products",
            Section::Analytics => "analytics",
            Section::Messages => "messages",
            Section::Matches => "matches",
            Section::Partnerships => "partnerships",
            Section::Orders => "orders",
            Section::Settings => "settings",
            Section::Users => "users",
        }
    }
}

/// Whether `role` may open `section`
pub fn can_access(role: Role, section: Section) -> bool {
    role.sections().contains(&section)
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = MatchmakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::UnknownRole {
                    value: s.to_string(),
                }
                .into()
            })
    }
}

impl From<Role> for FieldValue {
    fn from(role: Role) -> Self {
        FieldValue::String(role.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert_eq!(" Retailer ".parse::<Role>().unwrap(), Role::Retailer);

        let err = "distributor".parse::<Role>().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("distributor"));
    }

    #[test]
    fn test_access_table() {
        assert!(can_access(Role::Admin, Section::Users));
        assert!(!can_access(Role::Manufacturer, Section::Users));
        assert!(!can_access(Role::Brand, Section::Orders));
        assert!(!can_access(Role::Retailer, Section::Analytics));

        for role in Role::ALL {
            assert!(can_access(role, Section::Dashboard));
            assert!(can_access(role, Section::Settings));
        }
    }

    #[test]
    fn test_routes() {
        assert_eq!(Role::Brand.dashboard(), "/brand/dashboard");
        assert_eq!(Role::Admin.route(Section::Users), "/admin/users");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Manufacturer).unwrap(), "\"manufacturer\"");
        let section: Section = serde_json::from_str("\"partnerships\"").unwrap();
        assert_eq!(section, Section::Partnerships);
    }
}
