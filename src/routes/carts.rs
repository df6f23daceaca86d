use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::carts::{AddToCartRequest, CartLineList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::CartEntry,
    response::{ApiMessage, ApiResponse},
    routes::params::{self, Pagination},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cart).post(add_to_cart))
        .route("/{item_id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/carts",
    params(
        ("limit" = Option<i64>, Query, description = "Page size, default 20, max 100"),
        ("offset" = Option<i64>, Query, description = "Rows to skip, default 0"),
    ),
    responses(
        (status = 200, description = "Cart lines with their items", body = ApiResponse<CartLineList>),
        (status = 400, description = "Limit above 100", body = ApiMessage),
    ),
    security(("bearer_auth" = [])),
    tag = "Carts"
)]
pub async fn list_cart(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CartLineList>>> {
    let (limit, offset) = pagination.bounds()?;
    let items = cart_service::list_cart(&state, &user, limit, offset).await?;
    Ok(Json(ApiResponse::new(CartLineList { items })))
}

#[utoipa::path(
    post,
    path = "/carts",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Cart line added or replaced", body = ApiResponse<CartEntry>),
        (status = 400, description = "Bad amount or unknown item", body = ApiMessage),
    ),
    security(("bearer_auth" = [])),
    tag = "Carts"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CartEntry>>)> {
    let entry = cart_service::add_to_cart(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(entry))))
}

#[utoipa::path(
    delete,
    path = "/carts/{item_id}",
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 201, description = "Cart line removed", body = ApiMessage),
        (status = 404, description = "Item not in the cart", body = ApiMessage),
    ),
    security(("bearer_auth" = [])),
    tag = "Carts"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    user: AuthUser,
    Path(item_id): Path<String>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    let item_id = params::parse_id(&item_id)?;
    cart_service::remove_from_cart(&state, &user, item_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::new("Cart deleted success")),
    ))
}
