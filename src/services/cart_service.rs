use crate::{
    dto::carts::{AddToCartRequest, CartLine},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::CartEntry,
    repositories::{cart_repository, item_repository},
    state::AppState,
};

/// Add an item to the cart, or replace the carted amount if it is already
/// there. The amount must fit the item's per-order cap.
pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<CartEntry> {
    if payload.amount <= 0 {
        return Err(AppError::BadRequest(
            "amount must be greater than 0".to_string(),
        ));
    }

    let item = item_repository::read_item(&state.orm, payload.item_id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Item not found".to_string()))?;

    if payload.amount > item.max_amount {
        return Err(AppError::BadRequest(
            "amount exceeds the item's max_amount".to_string(),
        ));
    }

    cart_repository::upsert(&state.orm, user.user_id, payload.item_id, payload.amount).await
}

pub async fn list_cart(
    state: &AppState,
    user: &AuthUser,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<CartLine>> {
    cart_repository::list(&state.pool, user.user_id, limit, offset).await
}

pub async fn remove_from_cart(state: &AppState, user: &AuthUser, item_id: i32) -> AppResult<()> {
    let affected = cart_repository::remove(&state.orm, user.user_id, item_id).await?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
