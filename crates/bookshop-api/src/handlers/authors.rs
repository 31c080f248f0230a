//! Author list handler.

use axum::Json;
use axum::extract::{Query, State};

use bookshop_core::types::PageResponse;
use bookshop_entity::Author;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ListParams;
use crate::state::AppState;

/// GET /api/authors?filter=...&page=...&limit=...
pub async fn list_authors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResponse<Author>>>, ApiError> {
    let page = params.pagination(&state.pagination);
    let result = state.authors.list(params.filter(), &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}
