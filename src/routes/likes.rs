use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::likes::{LikeRequest, LikedItemList},
    error::AppResult,
    middleware::auth::AuthUser,
    response::{ApiMessage, ApiResponse},
    routes::params::{self, Pagination},
    services::like_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_likes).post(like_item))
        .route("/{item_id}", delete(unlike_item))
}

#[utoipa::path(
    get,
    path = "/likes",
    params(
        ("limit" = Option<i64>, Query, description = "Page size, default 20, max 100"),
        ("offset" = Option<i64>, Query, description = "Rows to skip, default 0"),
    ),
    responses(
        (status = 200, description = "Items the user liked", body = ApiResponse<LikedItemList>),
        (status = 400, description = "Limit above 100", body = ApiMessage),
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn list_likes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<LikedItemList>>> {
    let (limit, offset) = pagination.bounds()?;
    let items = like_service::list_liked_items(&state, &user, limit, offset).await?;
    Ok(Json(ApiResponse::new(LikedItemList { items })))
}

#[utoipa::path(
    post,
    path = "/likes",
    request_body = LikeRequest,
    responses(
        (status = 201, description = "Item liked", body = ApiMessage),
        (status = 400, description = "Item not found", body = ApiMessage),
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn like_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<LikeRequest>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    like_service::like_item(&state, &user, payload.item_id).await?;
    Ok((StatusCode::CREATED, Json(ApiMessage::new("Like success"))))
}

#[utoipa::path(
    delete,
    path = "/likes/{item_id}",
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 201, description = "Like removed", body = ApiMessage),
        (status = 404, description = "No like to remove", body = ApiMessage),
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn unlike_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(item_id): Path<String>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    let item_id = params::parse_id(&item_id)?;
    like_service::unlike_item(&state, &user, item_id).await?;
    Ok((StatusCode::CREATED, Json(ApiMessage::new("Unlike success"))))
}
