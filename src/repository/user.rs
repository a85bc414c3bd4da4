//! Repository implementation for users.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;

use crate::{
    context::RequestContext,
    domain::{
        types::UserId,
        user::{NewUser, User, UserFilters, UserPatch},
    },
    models::user::{NewUser as DbNewUser, UpdateUser as DbUpdateUser, User as DbUser},
    repository::{
        DieselRepository, UserReader, UserWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::users,
};

diesel::define_sql_function! {
    /// Unicode-aware lowercase. SQLite's own `lower()` only folds ASCII.
    fn ulower(x: Text) -> Text;
}

/// Installs the SQL functions the user queries depend on.
pub(crate) fn register_sql_functions(conn: &mut SqliteConnection) -> QueryResult<()> {
    ulower_utils::register_impl(conn, |value: String| value.to_lowercase())
}

/// `LIKE` pattern matching `value` anywhere, with wildcards taken literally.
///
/// Lowercased the same way as [`ulower`] so both sides of the match agree.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Users matching `filters`.
///
/// Count and fetch both start from this query so the reported total and the
/// returned page describe the same set.
pub(crate) fn filtered_users(filters: &UserFilters) -> users::BoxedQuery<'static, Sqlite> {
    let mut query = users::table.into_boxed();

    if let Some(first_name) = filters.first_name.as_deref() {
        query = query.filter(
            ulower(users::first_name)
                .like(contains_pattern(first_name))
                .escape('\\'),
        );
    }

    if let Some(last_name) = filters.last_name.as_deref() {
        query = query.filter(
            ulower(users::last_name)
                .like(contains_pattern(last_name))
                .escape('\\'),
        );
    }

    query
}

impl UserReader for DieselRepository {
    fn get_user(&self, ctx: &RequestContext, id: &UserId) -> RepositoryResult<User> {
        self.with_conn(ctx, "get_user", |conn| {
            users::table
                .find(id.as_str())
                .first::<DbUser>(conn)
                .optional()?
                .map(Into::into)
                .ok_or_else(|| RepositoryError::NotFound(id.clone()))
        })
    }

    fn list_users(
        &self,
        ctx: &RequestContext,
        filters: &UserFilters,
        offset: i64,
        limit: i64,
    ) -> RepositoryResult<Vec<User>> {
        self.with_conn(ctx, "list_users", |conn| {
            let users = filtered_users(filters)
                .order((users::created_at.desc(), users::id.desc()))
                .limit(limit)
                .offset(offset)
                .load::<DbUser>(conn)?
                .into_iter()
                .map(Into::into)
                .collect();

            Ok(users)
        })
    }

    fn count_users(&self, ctx: &RequestContext, filters: &UserFilters) -> RepositoryResult<i64> {
        self.with_conn(ctx, "count_users", |conn| {
            let total = filtered_users(filters).count().get_result::<i64>(conn)?;
            Ok(total)
        })
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, ctx: &RequestContext, new_user: &NewUser) -> RepositoryResult<User> {
        let id = UserId::generate();
        let now = Utc::now().naive_utc();

        let insertable = DbNewUser {
            id: id.as_str(),
            first_name: &new_user.first_name,
            last_name: &new_user.last_name,
            email: &new_user.email,
            phone: &new_user.phone,
            created_at: now,
            updated_at: now,
        };

        let created = self.with_conn(ctx, "create_user", |conn| {
            let created = diesel::insert_into(users::table)
                .values(&insertable)
                .get_result::<DbUser>(conn)?;
            Ok(User::from(created))
        })?;

        log::info!("[repository] created user {}", created.id);
        Ok(created)
    }

    fn update_user(
        &self,
        ctx: &RequestContext,
        id: &UserId,
        patch: &UserPatch,
    ) -> RepositoryResult<()> {
        self.with_conn(ctx, "update_user", |conn| {
            // An empty patch changes nothing but must still resolve the id.
            let found = if patch.is_empty() {
                users::table
                    .find(id.as_str())
                    .count()
                    .get_result::<i64>(conn)?
                    > 0
            } else {
                let changes = DbUpdateUser::from_patch(patch, Utc::now().naive_utc());
                diesel::update(users::table.find(id.as_str()))
                    .set(&changes)
                    .execute(conn)?
                    > 0
            };

            if found {
                Ok(())
            } else {
                Err(RepositoryError::NotFound(id.clone()))
            }
        })
    }

    fn delete_user(&self, ctx: &RequestContext, id: &UserId) -> RepositoryResult<()> {
        self.with_conn(ctx, "delete_user", |conn| {
            let deleted = diesel::delete(users::table.find(id.as_str())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound(id.clone()));
            }
            Ok(())
        })
    }
}
