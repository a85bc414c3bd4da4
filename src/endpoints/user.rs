use validator::Validate;

use crate::context::RequestContext;
use crate::dto::response::Response;
use crate::dto::user::{
    CreateUserRequest, DeleteUserRequest, GetAllUsersRequest, GetUserRequest, UpdateUserRequest,
    UserRequest,
};
use crate::endpoints::{EndpointConfig, EndpointError, EndpointResult};
use crate::pagination::Meta;
use crate::repository::{UserReader, UserWriter};
use crate::services::ServiceError;
use crate::services::user::UserService;

/// User operations as transport-agnostic controllers.
#[derive(Clone, Debug)]
pub struct UserEndpoints<R> {
    service: UserService<R>,
    config: EndpointConfig,
}

impl<R> UserEndpoints<R>
where
    R: UserReader + UserWriter,
{
    pub fn new(repo: R, config: EndpointConfig) -> Self {
        Self {
            service: UserService::new(repo),
            config,
        }
    }

    /// Validates names before anything reaches the store.
    pub fn create(&self, ctx: &RequestContext, req: CreateUserRequest) -> EndpointResult<Response> {
        req.validate()
            .map_err(|e| EndpointError::from_validation(&e, &CreateUserRequest::FIELDS))?;

        let user = self
            .service
            .create(ctx, req.first_name, req.last_name, req.email, req.phone)
            .map_err(internal("create user"))?;

        Ok(Response::created(user))
    }

    pub fn get(&self, ctx: &RequestContext, req: GetUserRequest) -> EndpointResult<Response> {
        let user = self
            .service
            .get(ctx, &req.id)
            .map_err(internal("get user"))?;
        Ok(Response::ok(user, None))
    }

    /// Counts first, derives the page from that count, then fetches the page.
    ///
    /// The two queries are not isolated from each other, so a concurrent
    /// writer can make the returned rows disagree with `totalCount`.
    pub fn get_all(
        &self,
        ctx: &RequestContext,
        req: GetAllUsersRequest,
    ) -> EndpointResult<Response> {
        let filters = req.filters();

        let total = self
            .service
            .count(ctx, &filters)
            .map_err(internal("count users"))?;

        let meta = Meta::new(
            req.page.unwrap_or(0),
            req.limit.unwrap_or(0),
            total,
            &self.config.default_limit,
        )
        .map_err(|e| {
            log::error!("Failed to build page metadata: {e}");
            EndpointError::from(e)
        })?;

        let users = self
            .service
            .get_all(ctx, &filters, meta.offset(), meta.limit())
            .map_err(internal("list users"))?;

        Ok(Response::ok(users, Some(meta)))
    }

    /// Applies only the fields present in the request.
    pub fn update(&self, ctx: &RequestContext, req: UpdateUserRequest) -> EndpointResult<Response> {
        req.validate()
            .map_err(|e| EndpointError::from_validation(&e, &UpdateUserRequest::FIELDS))?;

        self.service
            .update(ctx, &req.id, &req.patch())
            .map_err(internal("update user"))?;

        Ok(Response::empty())
    }

    pub fn delete(&self, ctx: &RequestContext, req: DeleteUserRequest) -> EndpointResult<Response> {
        self.service
            .delete(ctx, &req.id)
            .map_err(internal("delete user"))?;
        Ok(Response::empty())
    }

    /// Dispatches any request variant and folds failures into the envelope.
    pub fn handle(&self, ctx: &RequestContext, request: UserRequest) -> Response {
        let result = match request {
            UserRequest::Create(req) => self.create(ctx, req),
            UserRequest::Get(req) => self.get(ctx, req),
            UserRequest::GetAll(req) => self.get_all(ctx, req),
            UserRequest::Update(req) => self.update(ctx, req),
            UserRequest::Delete(req) => self.delete(ctx, req),
        };

        result.unwrap_or_else(Response::from)
    }
}

/// Classifies a service failure, logging the ones callers can't act on.
fn internal(operation: &'static str) -> impl Fn(ServiceError) -> EndpointError {
    move |err| {
        let err = EndpointError::from(err);
        if let EndpointError::Internal(message) = &err {
            log::error!("Failed to {operation}: {message}");
        }
        err
    }
}
