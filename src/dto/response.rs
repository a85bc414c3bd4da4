//! Uniform result envelope returned by every endpoint.

use serde::Serialize;

use crate::domain::user::User;
use crate::endpoints::EndpointError;
use crate::pagination::Meta;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    User(User),
    Users(Vec<User>),
}

impl From<User> for ResponseData {
    fn from(user: User) -> Self {
        ResponseData::User(user)
    }
}

impl From<Vec<User>> for ResponseData {
    fn from(users: Vec<User>) -> Self {
        ResponseData::Users(users)
    }
}

/// Success responses never carry `err`; error responses never carry `data`.
/// Only list results carry `meta`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
}

impl Response {
    pub fn ok(data: impl Into<ResponseData>, meta: Option<Meta>) -> Self {
        Self {
            status: STATUS_OK,
            data: Some(data.into()),
            err: None,
            meta,
        }
    }

    pub fn created(data: impl Into<ResponseData>) -> Self {
        Self {
            status: STATUS_CREATED,
            data: Some(data.into()),
            err: None,
            meta: None,
        }
    }

    /// Success without a payload.
    pub fn empty() -> Self {
        Self {
            status: STATUS_OK,
            data: None,
            err: None,
            meta: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(STATUS_BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(STATUS_NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::error(STATUS_INTERNAL_ERROR, message)
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            err: Some(message.into()),
            meta: None,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn data(&self) -> Option<&ResponseData> {
        self.data.as_ref()
    }

    pub fn err(&self) -> Option<&str> {
        self.err.as_deref()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

impl From<EndpointError> for Response {
    fn from(err: EndpointError) -> Self {
        match err {
            EndpointError::Validation { .. } => Response::bad_request(err.to_string()),
            EndpointError::NotFound(_) => Response::not_found(err.to_string()),
            EndpointError::Internal(_) => Response::internal_error(err.to_string()),
        }
    }
}
