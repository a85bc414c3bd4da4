//! Page metadata derived from caller input and a prior count query.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("invalid default page limit '{0}': expected a positive integer")]
    InvalidDefaultLimit(String),
}

/// Normalized pagination values exposed to callers.
///
/// `limit` is always positive and `offset` never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    page: i64,
    limit: i64,
    total_count: i64,
    total_pages: i64,
    offset: i64,
}

fn parse_default_limit(default_limit: &str) -> Result<i64, PaginationError> {
    match default_limit.trim().parse::<i64>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(PaginationError::InvalidDefaultLimit(default_limit.to_string())),
    }
}

impl Meta {
    /// Builds page metadata.
    ///
    /// A `page` of zero or less becomes 1. A `limit` of zero or less is
    /// replaced with `default_limit`, which must parse as a positive integer.
    /// `total_count` comes from a count over the same filters as the fetch.
    pub fn new(
        page: i64,
        limit: i64,
        total_count: i64,
        default_limit: &str,
    ) -> Result<Self, PaginationError> {
        let page = if page <= 0 { 1 } else { page };
        let limit = if limit <= 0 {
            parse_default_limit(default_limit)?
        } else {
            limit
        };
        let total_count = total_count.max(0);

        let offset = (page - 1).saturating_mul(limit);
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count - 1) / limit + 1
        };

        Ok(Self {
            page,
            limit,
            total_count,
            total_pages,
            offset,
        })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}
