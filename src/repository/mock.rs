//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::context::RequestContext;
use crate::domain::types::UserId;
use crate::domain::user::{NewUser, User, UserFilters, UserPatch};
use crate::repository::errors::RepositoryResult;
use crate::repository::{UserReader, UserWriter};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user(&self, ctx: &RequestContext, id: &UserId) -> RepositoryResult<User>;
        fn list_users(
            &self,
            ctx: &RequestContext,
            filters: &UserFilters,
            offset: i64,
            limit: i64,
        ) -> RepositoryResult<Vec<User>>;
        fn count_users(&self, ctx: &RequestContext, filters: &UserFilters) -> RepositoryResult<i64>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, ctx: &RequestContext, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(
            &self,
            ctx: &RequestContext,
            id: &UserId,
            patch: &UserPatch,
        ) -> RepositoryResult<()>;
        fn delete_user(&self, ctx: &RequestContext, id: &UserId) -> RepositoryResult<()>;
    }
}
