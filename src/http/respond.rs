//! Response helpers wrapping handler data through the configured formatter

use crate::error::Result;
use crate::pagination::{fetch_page, slice_page, PagedSource};
use crate::registry;
use crate::types::JsonValue;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// Serialize data and run it through the globally configured formatter
fn wrap(data: impl Serialize, meta: Option<JsonValue>) -> Result<JsonValue> {
    let formatter = registry::formatter()?;
    let data = serde_json::to_value(data)?;
    Ok(formatter.format(data, meta))
}

/// Success-response helpers for handler return values.
///
/// Blanket-implemented for anything serializable, so handlers read
/// `user.ok()` or `items.with_meta(meta)`. Every helper goes through the
/// configured formatter and fails with a configuration error when none is
/// installed.
pub trait Respond: Serialize + Sized {
    /// 200 OK with the wrapped payload
    fn ok(self) -> Result<Response> {
        Ok(Json(wrap(self, None)?).into_response())
    }

    /// 201 Created with a `Location` header and the wrapped payload
    fn created(self, location: &str) -> Result<Response> {
        let body = Json(wrap(self, None)?);
        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location.to_string())],
            body,
        )
            .into_response())
    }

    /// 200 OK for PUT/PATCH updates
    fn updated(self) -> Result<Response> {
        self.ok()
    }

    /// 200 OK with metadata attached to the envelope
    fn with_meta(self, meta: JsonValue) -> Result<Response> {
        Ok(Json(wrap(self, Some(meta))?).into_response())
    }

    /// Wrapped payload with a caller-chosen status code
    fn with_status(self, status: StatusCode) -> Result<Response> {
        Ok((status, Json(wrap(self, None)?)).into_response())
    }
}

impl<T: Serialize> Respond for T {}

/// 204 No Content (nothing to wrap)
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// 204 No Content, for DELETE endpoints
pub fn deleted() -> Response {
    no_content()
}

/// Paginated-response helper for in-memory sequences.
///
/// Slices the source, computes metadata via the configured calculator, and
/// formats the page with the metadata under `{"pagination": ...}`.
pub trait ToPagedResponse {
    /// 200 OK with one page of items and pagination metadata
    fn to_paged_response(&self, page: i64, page_size: i64) -> Result<Response>;
}

impl<T: Serialize + Clone> ToPagedResponse for [T] {
    fn to_paged_response(&self, page: i64, page_size: i64) -> Result<Response> {
        let formatter = registry::formatter()?;
        let calculator = registry::calculator()?;

        let paged = slice_page(self, page, page_size);
        let meta = calculator.compute(page, page_size, paged.total_count);

        let data = serde_json::to_value(paged.items)?;
        let body = formatter.format(data, Some(json!({ "pagination": meta })));
        Ok(Json(body).into_response())
    }
}

/// Paginated-response helper for remote sources.
///
/// `include_total = false` skips the count call; the unknown-total sentinel
/// then shows up in the metadata as documented by the calculator.
pub async fn paged_response<S>(
    source: &S,
    page: i64,
    page_size: i64,
    include_total: bool,
) -> Result<Response>
where
    S: PagedSource,
    S::Item: Serialize,
{
    let formatter = registry::formatter()?;
    let calculator = registry::calculator()?;

    let paged = fetch_page(source, page, page_size, include_total).await?;
    let meta = calculator.compute(page, page_size, paged.total_count);

    let data = serde_json::to_value(paged.items)?;
    let body = formatter.format(data, Some(json!({ "pagination": meta })));
    Ok(Json(body).into_response())
}
