//! UI state containers shared across views
//!
//! Each container owns its data and exposes the only mutators allowed on it.
//! They are passed explicitly to whatever needs them; there is no global
//! instance.

use crate::core::role::{Role, Section, can_access};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub display_name: String,
    pub role: Role,
}

impl Session {
    pub fn new(display_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            display_name: display_name.into(),
            role,
        }
    }
}

/// Holder of the current session, if any
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session; returns the role's landing route
    pub fn sign_in(&mut self, session: Session) -> String {
        let landing = session.role.dashboard();
        tracing::info!(user_id = %session.user_id, role = %session.role, "signed in");
        self.current = Some(session);
        landing
    }

    /// Drop the current session, returning it
    pub fn sign_out(&mut self) -> Option<Session> {
        let previous = self.current.take();
        if let Some(session) = &previous {
            tracing::info!(user_id = %session.user_id, "signed out");
        }
        previous
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|s| s.role)
    }

    /// Anonymous users can open nothing
    pub fn can_access(&self, section: Section) -> bool {
        self.role().is_some_and(|role| can_access(role, section))
    }
}

/// Set of favorited item ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `id`; returns whether it is now a favorite
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Default number of items that can be compared side by side
pub const COMPARE_CAPACITY: usize = 4;

/// Result of adding to a `CompareList`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    Added,
    AlreadyPresent,
    Full,
}

/// Ordered, bounded list of item ids selected for comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareList {
    ids: Vec<String>,
    capacity: usize,
}

impl Default for CompareList {
    fn default() -> Self {
        Self::with_capacity(COMPARE_CAPACITY)
    }
}

impl CompareList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::new(),
            capacity,
        }
    }

    /// Append `id` unless it is already listed or the list is full
    pub fn add(&mut self, id: &str) -> CompareOutcome {
        if self.contains(id) {
            CompareOutcome::AlreadyPresent
        } else if self.is_full() {
            CompareOutcome::Full
        } else {
            self.ids.push(id.to_string());
            CompareOutcome::Added
        }
    }

    /// Remove `id`; returns whether it was listed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Ids in the order they were added
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Per-user display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            language: "en".to_string(),
        }
    }
}
