use crate::{
    context::RequestContext,
    db::{DEFAULT_BUSY_TIMEOUT, DbConnection, DbPool, set_busy_timeout},
    domain::{
        types::UserId,
        user::{NewUser, User, UserFilters, UserPatch},
    },
    repository::errors::{RepositoryError, RepositoryResult},
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod user;

pub trait UserReader {
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

pub trait UserWriter {
    fn create_user(&self, ctx: &RequestContext, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(
        &self,
        ctx: &RequestContext,
        id: &UserId,
        patch: &UserPatch,
    ) -> RepositoryResult<()>;
    fn delete_user(&self, ctx: &RequestContext, id: &UserId) -> RepositoryResult<()>;
}

/// Diesel backed implementation of the user repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Checks out a connection while honouring the request context.
    ///
    /// The pool wait and SQLite's lock wait are both bounded by the time left
    /// until the context deadline. The context is checked again once the
    /// connection is in hand, right before the caller runs its statement.
    fn conn(&self, ctx: &RequestContext) -> RepositoryResult<DbConnection> {
        ctx.check()?;

        let mut conn = match ctx.remaining() {
            Some(remaining) => self.pool.get_timeout(remaining)?,
            None => self.pool.get()?,
        };

        ctx.check()?;
        set_busy_timeout(&mut conn, ctx.remaining().unwrap_or(DEFAULT_BUSY_TIMEOUT))?;

        Ok(conn)
    }

    /// Runs `f` on a context-checked connection, logging any failure.
    fn with_conn<T>(
        &self,
        ctx: &RequestContext,
        operation: &str,
        f: impl FnOnce(&mut DbConnection) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        self.conn(ctx)
            .and_then(|mut conn| f(&mut conn))
            .inspect_err(|err| log_failure(operation, err))
    }
}

fn log_failure(operation: &str, err: &RepositoryError) {
    match err {
        RepositoryError::NotFound(id) => {
            log::warn!("[repository] {operation}: user {id} doesn't exist");
        }
        _ => log::error!("[repository] {operation} failed: {err}"),
    }
}
