use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::categories::CategoryList, error::AppResult, response::ApiResponse,
    services::category_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Main categories with nested sub categories", body = ApiResponse<CategoryList>),
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let items = category_service::category_tree(&state).await?;
    Ok(Json(ApiResponse::new(CategoryList { items })))
}
