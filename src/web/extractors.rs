//! Request extractors
//!
//! Pagination parameters and per-request context for logging.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use super::middleware::RequestId;
use super::responses::handle_error;
use crate::errors::{AppError, AppResult};
use crate::utils::DEFAULT_PAGE_LIMIT;

/// Offset/limit pagination from the query string.
///
/// Missing or blank values fall back to offset 0 and the default page size.
/// Negative offsets and non-positive limits are passed through untouched;
/// the pagination engine decides what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawPageParams {
    limit: Option<String>,
    offset: Option<String>,
}

impl PageParams {
    fn from_raw(raw: RawPageParams) -> AppResult<Self> {
        Ok(Self {
            limit: parse_param(raw.limit.as_deref(), DEFAULT_PAGE_LIMIT)?,
            offset: parse_param(raw.offset.as_deref(), 0)?,
        })
    }
}

fn parse_param(value: Option<&str>, default: i64) -> AppResult<i64> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| AppError::validation("Invalid pagination parameters")),
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPageParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                handle_error(AppError::validation("Invalid pagination parameters")).into_response()
            })?;

        Self::from_raw(raw).map_err(|e| handle_error(e).into_response())
    }
}

/// Request metadata used in handler logs
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub user_agent: Option<String>,
    pub real_ip: Option<String>,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let real_ip = parts
            .headers
            .get("x-real-ip")
            .or_else(|| parts.headers.get("x-forwarded-for"))
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(',').next())
            .map(|s| s.trim().to_string());

        Ok(Self {
            request_id,
            user_agent,
            real_ip,
        })
    }
}
