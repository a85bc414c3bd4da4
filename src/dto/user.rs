//! Typed request variants accepted by the user endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::UserId;
use crate::domain::user::{UserFilters, UserPatch};

/// Payload for creating a user. Missing fields decode as empty strings.
#[derive(Clone, Debug, Default, Deserialize, Validate, PartialEq, Eq)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl CreateUserRequest {
    /// Validated fields in declaration order, used to pick the first failure.
    pub const FIELDS: [&'static str; 2] = ["first_name", "last_name"];
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct GetUserRequest {
    pub id: UserId,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DeleteUserRequest {
    pub id: UserId,
}

/// Sparse update. Absent fields are left untouched; email and phone may be
/// sent empty to clear them.
#[derive(Clone, Debug, Default, Deserialize, Validate, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// Filled from the path by the HTTP adapter.
    #[serde(default)]
    pub id: UserId,
    #[validate(length(min = 1, message = "first name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "last name must not be empty"))]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateUserRequest {
    /// Validated fields in declaration order.
    pub const FIELDS: [&'static str; 2] = ["first_name", "last_name"];

    pub fn patch(&self) -> UserPatch {
        UserPatch {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct GetAllUsersRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

impl GetAllUsersRequest {
    pub fn filters(&self) -> UserFilters {
        UserFilters::new(self.first_name.clone(), self.last_name.clone())
    }
}

/// Every operation the user endpoints understand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserRequest {
    Create(CreateUserRequest),
    Get(GetUserRequest),
    GetAll(GetAllUsersRequest),
    Update(UpdateUserRequest),
    Delete(DeleteUserRequest),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_missing_fields() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"first_name":"Ana"}"#).unwrap();
        assert_eq!(req.first_name, "Ana");
        assert!(req.last_name.is_empty());
        assert!(req.email.is_empty());

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("last_name"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn update_request_allows_clearing_contact_fields() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"email":"","phone":""}"#).unwrap();
        assert!(req.validate().is_ok());

        let patch = req.patch();
        assert_eq!(patch.email.as_deref(), Some(""));
        assert_eq!(patch.phone.as_deref(), Some(""));
        assert!(patch.first_name.is_none());
    }

    #[test]
    fn update_request_rejects_empty_names() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"first_name":""}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn get_all_request_normalizes_empty_filters() {
        let req = GetAllUsersRequest {
            first_name: Some(String::new()),
            last_name: Some("Lo".to_string()),
            ..Default::default()
        };
        let filters = req.filters();
        assert!(filters.first_name.is_none());
        assert_eq!(filters.last_name.as_deref(), Some("Lo"));
    }

    #[test]
    fn field_lists_cover_exactly_the_validated_fields() {
        let create = CreateUserRequest::default().validate().unwrap_err();
        let create_errors = create.field_errors();
        let mut failing: Vec<&str> = create_errors.keys().map(|k| &**k).collect();
        failing.sort_unstable();
        let mut listed = CreateUserRequest::FIELDS.to_vec();
        listed.sort_unstable();
        assert_eq!(failing, listed);

        let update = UpdateUserRequest {
            first_name: Some(String::new()),
            last_name: Some(String::new()),
            email: Some(String::new()),
            phone: Some(String::new()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        let update_errors = update.field_errors();
        let mut failing: Vec<&str> = update_errors.keys().map(|k| &**k).collect();
        failing.sort_unstable();
        let mut listed = UpdateUserRequest::FIELDS.to_vec();
        listed.sort_unstable();
        assert_eq!(failing, listed);
    }
}
