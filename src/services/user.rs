use crate::context::RequestContext;
use crate::domain::types::UserId;
use crate::domain::user::{NewUser, User, UserFilters, UserPatch};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Thin orchestration over the user repository.
///
/// Input is taken as-is; validation belongs to the endpoint layer.
#[derive(Clone, Debug)]
pub struct UserService<R> {
    repo: R,
}

impl<R> UserService<R>
where
    R: UserReader + UserWriter,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new user built from the provided fields.
    pub fn create(
        &self,
        ctx: &RequestContext,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
    ) -> ServiceResult<User> {
        log::debug!("creating user");
        let new_user = NewUser::new(first_name, last_name, email, phone);
        self.repo
            .create_user(ctx, &new_user)
            .map_err(ServiceError::from)
    }

    /// Fetches a user by identifier.
    pub fn get(&self, ctx: &RequestContext, id: &UserId) -> ServiceResult<User> {
        self.repo.get_user(ctx, id).map_err(ServiceError::from)
    }

    /// Lists one page of users matching `filters`, newest first.
    pub fn get_all(
        &self,
        ctx: &RequestContext,
        filters: &UserFilters,
        offset: i64,
        limit: i64,
    ) -> ServiceResult<Vec<User>> {
        self.repo
            .list_users(ctx, filters, offset, limit)
            .map_err(ServiceError::from)
    }

    /// Counts all users matching `filters`.
    pub fn count(&self, ctx: &RequestContext, filters: &UserFilters) -> ServiceResult<i64> {
        self.repo
            .count_users(ctx, filters)
            .map_err(ServiceError::from)
    }

    /// Applies the present fields of `patch` to the user.
    pub fn update(&self, ctx: &RequestContext, id: &UserId, patch: &UserPatch) -> ServiceResult<()> {
        self.repo
            .update_user(ctx, id, patch)
            .map_err(ServiceError::from)
    }

    /// Removes the user permanently.
    pub fn delete(&self, ctx: &RequestContext, id: &UserId) -> ServiceResult<()> {
        self.repo.delete_user(ctx, id).map_err(ServiceError::from)
    }
}
