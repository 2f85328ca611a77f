//! Bookmark API routes
//!
//! All endpoints require a bearer token and act only on the caller's
//! own bookmarks.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::{parse_id, ValidatedJson};
use crate::services::BookmarkService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookmark_shared::types::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};

/// Create bookmark routes
pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_bookmarks).post(create_bookmark))
        .route(
            "/:id",
            get(get_bookmark)
                .patch(edit_bookmark)
                .delete(delete_bookmark),
        )
}

/// GET /bookmarks
async fn get_bookmarks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BookmarkResponse>>> {
    let bookmarks = BookmarkService::get_bookmarks(state.db(), auth.user_id).await?;
    Ok(Json(bookmarks))
}

/// GET /bookmarks/:id
async fn get_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<BookmarkResponse>> {
    let bookmark_id = parse_id(&id)?;
    let bookmark = BookmarkService::get_bookmark_by_id(state.db(), auth.user_id, bookmark_id).await?;
    Ok(Json(bookmark))
}

/// POST /bookmarks
async fn create_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookmarkRequest>,
) -> ApiResult<(StatusCode, Json<BookmarkResponse>)> {
    let bookmark = BookmarkService::create_bookmark(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// PATCH /bookmarks/:id
async fn edit_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<EditBookmarkRequest>,
) -> ApiResult<Json<BookmarkResponse>> {
    let bookmark_id = parse_id(&id)?;
    let bookmark =
        BookmarkService::edit_bookmark_by_id(state.db(), auth.user_id, bookmark_id, req).await?;
    Ok(Json(bookmark))
}

/// DELETE /bookmarks/:id
async fn delete_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<BookmarkResponse>> {
    let bookmark_id = parse_id(&id)?;
    let bookmark =
        BookmarkService::delete_bookmark_by_id(state.db(), auth.user_id, bookmark_id).await?;
    Ok(Json(bookmark))
}
