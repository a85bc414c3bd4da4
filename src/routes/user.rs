use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::Deserialize;

use crate::context::RequestContext;
use crate::domain::types::UserId;
use crate::dto::response::Response;
use crate::dto::user::{
    CreateUserRequest, DeleteUserRequest, GetAllUsersRequest, GetUserRequest, UpdateUserRequest,
    UserRequest,
};
use crate::endpoints::user::UserEndpoints;
use crate::repository::DieselRepository;
use crate::routes::{RequestSettings, respond};

type Endpoints = web::Data<UserEndpoints<DieselRepository>>;
type Settings = web::Data<RequestSettings>;

/// Raw listing query. Numbers that fail to parse count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl From<ListUsersQuery> for GetAllUsersRequest {
    fn from(query: ListUsersQuery) -> Self {
        GetAllUsersRequest {
            first_name: query.first_name,
            last_name: query.last_name,
            limit: query.limit.and_then(|v| v.trim().parse().ok()),
            page: query.page.and_then(|v| v.trim().parse().ok()),
        }
    }
}

/// Runs the request on the blocking pool under a deadline.
///
/// The context is cancelled if this future is dropped, so queued store work
/// for a disconnected client is skipped.
async fn dispatch(endpoints: Endpoints, settings: Settings, request: UserRequest) -> HttpResponse {
    let ctx = RequestContext::with_timeout(settings.timeout);
    let _cancel = ctx.cancel_on_drop();

    let worker_ctx = ctx.clone();
    match web::block(move || endpoints.handle(&worker_ctx, request)).await {
        Ok(response) => respond(response),
        Err(e) => {
            log::error!("Failed to run user request: {e}");
            respond(Response::internal_error("request could not be processed"))
        }
    }
}

#[post("/users")]
pub async fn create_user(
    body: web::Json<CreateUserRequest>,
    endpoints: Endpoints,
    settings: Settings,
) -> HttpResponse {
    dispatch(endpoints, settings, UserRequest::Create(body.into_inner())).await
}

#[get("/users")]
pub async fn list_users(
    query: web::Query<ListUsersQuery>,
    endpoints: Endpoints,
    settings: Settings,
) -> HttpResponse {
    let request = GetAllUsersRequest::from(query.into_inner());
    dispatch(endpoints, settings, UserRequest::GetAll(request)).await
}

#[get("/users/{id}")]
pub async fn get_user(
    path: web::Path<String>,
    endpoints: Endpoints,
    settings: Settings,
) -> HttpResponse {
    let request = GetUserRequest {
        id: UserId::new(path.into_inner()),
    };
    dispatch(endpoints, settings, UserRequest::Get(request)).await
}

#[patch("/users/{id}")]
pub async fn update_user(
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
    endpoints: Endpoints,
    settings: Settings,
) -> HttpResponse {
    let mut request = body.into_inner();
    request.id = UserId::new(path.into_inner());
    dispatch(endpoints, settings, UserRequest::Update(request)).await
}

#[delete("/users/{id}")]
pub async fn delete_user(
    path: web::Path<String>,
    endpoints: Endpoints,
    settings: Settings,
) -> HttpResponse {
    let request = DeleteUserRequest {
        id: UserId::new(path.into_inner()),
    };
    dispatch(endpoints, settings, UserRequest::Delete(request)).await
}
