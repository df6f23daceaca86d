use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::items::{ItemList, UpdateItemQuery},
    error::{AppError, AppResult},
    models::Item,
    response::{ApiMessage, ApiResponse},
    routes::params::{self, ItemListQuery},
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route("/new", get(new_items))
        .route(
            "/{key}",
            get(get_item).delete(delete_item).patch(update_item),
        )
}

#[utoipa::path(
    get,
    path = "/items",
    params(
        ("main_category_id" = Option<i32>, Query, description = "Only items under this main category"),
        ("sub_category_id" = Option<i32>, Query, description = "Only items with this sub category"),
        ("sort" = Option<String>, Query, description = "likeCount, price or name; anything else is insertion order"),
        ("order" = Option<String>, Query, description = "ASC or DESC (case-insensitive), default ASC"),
        ("limit" = Option<i64>, Query, description = "Page size, default 20, max 100"),
        ("offset" = Option<i64>, Query, description = "Rows to skip, default 0"),
    ),
    responses(
        (status = 200, description = "List items", body = ApiResponse<ItemList>),
        (status = 400, description = "Limit above 100", body = ApiMessage),
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemListQuery>,
) -> AppResult<Json<ApiResponse<ItemList>>> {
    let (limit, offset) = query.bounds()?;
    let sort = query.sort();
    let direction = query.direction();

    // The main-category filter wins when both are present.
    let items = if let Some(main_category_id) = query.main_category_id {
        item_service::get_main_list(&state, main_category_id, sort, direction, limit, offset)
            .await?
    } else if let Some(sub_category_id) = query.sub_category_id {
        item_service::get_sub_list(&state, sub_category_id, sort, direction, limit, offset).await?
    } else {
        item_service::get_all(&state, sort, direction, limit, offset).await?
    };

    Ok(Json(ApiResponse::new(ItemList { items })))
}

#[utoipa::path(
    get,
    path = "/items/new",
    responses(
        (status = 200, description = "Items tagged as new arrivals", body = ApiResponse<ItemList>),
    ),
    tag = "Items"
)]
pub async fn new_items(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ItemList>>> {
    let items = item_service::get_new_list(&state).await?;
    Ok(Json(ApiResponse::new(ItemList { items })))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Single item", body = ApiResponse<Item>),
        (status = 400, description = "Non-numeric id", body = ApiMessage),
        (status = 404, description = "Item not found", body = ApiMessage),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse<Item>>> {
    let id = params::parse_id(&key)?;
    let item = item_service::get_item_by_id(&state, id).await?;
    Ok(Json(ApiResponse::new(item)))
}

#[utoipa::path(
    delete,
    path = "/items/{item_name}",
    params(
        ("item_name" = String, Path, description = "Unique item name")
    ),
    responses(
        (status = 201, description = "Item deleted", body = ApiMessage),
        (status = 404, description = "No item with that name", body = ApiMessage),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    item_service::delete_item(&state, &key).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::new("Item deleted success")),
    ))
}

#[utoipa::path(
    patch,
    path = "/items/{item_name}",
    params(
        ("item_name" = String, Path, description = "Unique item name"),
        ("name" = Option<String>, Query, description = "New name"),
        ("description" = Option<String>, Query, description = "New description"),
        ("price" = Option<String>, Query, description = "New price"),
        ("detail" = Option<String>, Query, description = "New detail"),
        ("max_amount" = Option<i32>, Query, description = "New per-order cap"),
        ("stock" = Option<i32>, Query, description = "New stock"),
    ),
    responses(
        (status = 201, description = "Item updated", body = ApiMessage),
        (status = 400, description = "No fields to update", body = ApiMessage),
        (status = 404, description = "No item with that name", body = ApiMessage),
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(fields): Query<UpdateItemQuery>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    if fields.is_empty() {
        return Err(AppError::KeyError);
    }
    item_service::update_item(&state, &key, fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::new("Item update success")),
    ))
}
