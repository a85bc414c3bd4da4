use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::UserId;
use crate::domain::user::{User as DomainUser, UserPatch as DomainUserPatch};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
/// Sparse changeset: `None` fields are left out of the `UPDATE` statement.
pub struct UpdateUser<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<User> for DomainUser {
    fn from(user: User) -> Self {
        Self {
            id: UserId::new(user.id),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl<'a> UpdateUser<'a> {
    pub fn from_patch(patch: &'a DomainUserPatch, updated_at: NaiveDateTime) -> Self {
        Self {
            first_name: patch.first_name.as_deref(),
            last_name: patch.last_name.as_deref(),
            email: patch.email.as_deref(),
            phone: patch.phone.as_deref(),
            updated_at,
        }
    }
}
