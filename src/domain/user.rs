use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Caller supplied fields of a user that is about to be stored.
///
/// Identity and timestamps are assigned by the repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    #[must_use]
    pub fn new(first_name: String, last_name: String, email: String, phone: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone,
        }
    }
}

/// Sparse set of changes applied to an existing user.
///
/// `None` leaves the column untouched, `Some(value)` overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserPatch {
    #[must_use]
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// Case-insensitive substring constraints for listing users.
///
/// Empty strings are normalized to `None`, meaning no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserFilters {
    #[must_use]
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name: first_name.filter(|s| !s.is_empty()),
            last_name: last_name.filter(|s| !s.is_empty()),
        }
    }

    #[must_use]
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into()).filter(|s| !s.is_empty());
        self
    }

    #[must_use]
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into()).filter(|s| !s.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty() {
        assert!(UserPatch::default().is_empty());
        assert!(!UserPatch::default().phone("").is_empty());
    }

    #[test]
    fn filters_drop_empty_values() {
        let filters = UserFilters::new(Some(String::new()), Some("lo".to_string()));
        assert_eq!(filters.first_name, None);
        assert_eq!(filters.last_name.as_deref(), Some("lo"));

        let filters = UserFilters::default().first_name("").last_name("x");
        assert_eq!(filters.first_name, None);
        assert_eq!(filters.last_name.as_deref(), Some("x"));
    }
}
