use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Item,
    repositories::{item_repository, like_repository},
    state::AppState,
};

/// Idempotent: liking an already-liked item is a no-op.
pub async fn like_item(state: &AppState, user: &AuthUser, item_id: i32) -> AppResult<()> {
    if item_repository::read_item(&state.orm, item_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("Item not found".to_string()));
    }

    if like_repository::find(&state.orm, user.user_id, item_id)
        .await?
        .is_some()
    {
        return Ok(());
    }

    like_repository::add(&state.orm, user.user_id, item_id).await
}

pub async fn unlike_item(state: &AppState, user: &AuthUser, item_id: i32) -> AppResult<()> {
    let affected = like_repository::remove(&state.orm, user.user_id, item_id).await?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn list_liked_items(
    state: &AppState,
    user: &AuthUser,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    like_repository::list_items(&state.pool, user.user_id, limit, offset).await
}
