//! HTTP boundary glue for axum
//!
//! Everything a handler needs to hand wrapped responses to the wire: the
//! [`PageQuery`] extractor type, the [`Respond`] and [`ToPagedResponse`]
//! extension traits, and the error-to-response mapping. The core stays
//! HTTP-free; this module is the only place that knows about status codes.

mod respond;

pub use respond::{deleted, no_content, paged_response, Respond, ToPagedResponse};

use crate::error::Error;
use crate::pagination::normalize;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Default page when the query string omits `page`
fn default_page() -> i64 {
    1
}

/// Default page size when the query string omits `page_size`
fn default_page_size() -> i64 {
    20
}

/// Pagination query parameters (`?page=&page_size=`).
///
/// Accepts `pageSize` as an alias so camelCase clients work unchanged.
/// Values arrive raw; call [`PageQuery::normalized`] before slicing.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// Requested page number (1-based), default 1
    #[serde(default = "default_page")]
    pub page: i64,
    /// Requested page size, default 20
    #[serde(default = "default_page_size", alias = "pageSize")]
    pub page_size: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageQuery {
    /// Clamp page to >= 1 and page size into the default bounds
    pub fn normalized(&self) -> (i64, i64) {
        normalize(self.page, self.page_size)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Error::FormatterNotConfigured | Error::PaginationNotConfigured | Error::Config { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "NOT_CONFIGURED")
            }
            Error::Serialize(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SERIALIZE_ERROR"),
            Error::Source { .. } => (StatusCode::BAD_GATEWAY, "SOURCE_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        }

        let body = json!({
            "error": self.to_string(),
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}
