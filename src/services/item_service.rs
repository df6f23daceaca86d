use crate::{
    dto::items::UpdateItemQuery,
    error::{AppError, AppResult},
    models::Item,
    repositories::item_repository,
    routes::params::{ItemSort, SortDirection},
    state::AppState,
};

pub async fn get_all(
    state: &AppState,
    sort: ItemSort,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    item_repository::get_all(&state.pool, sort, direction, limit, offset).await
}

pub async fn get_main_list(
    state: &AppState,
    main_category_id: i32,
    sort: ItemSort,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    item_repository::get_main_list(&state.pool, main_category_id, sort, direction, limit, offset)
        .await
}

pub async fn get_sub_list(
    state: &AppState,
    sub_category_id: i32,
    sort: ItemSort,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    item_repository::get_sub_list(&state.pool, sub_category_id, sort, direction, limit, offset)
        .await
}

pub async fn get_new_list(state: &AppState) -> AppResult<Vec<Item>> {
    item_repository::get_new_list(&state.orm).await
}

pub async fn get_item_by_id(state: &AppState, id: i32) -> AppResult<Item> {
    item_repository::read_item(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn delete_item(state: &AppState, name: &str) -> AppResult<()> {
    let affected = item_repository::delete_item(&state.orm, name).await?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn update_item(state: &AppState, name: &str, fields: UpdateItemQuery) -> AppResult<()> {
    let affected = item_repository::update_item(&state.orm, name, fields).await?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
