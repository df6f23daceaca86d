use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use sqlx::FromRow;

use crate::{
    db::{DbPool, OrmConn},
    dto::carts::CartLine,
    entity::{self, Carts, carts::Column as CartCol},
    error::AppResult,
    models::{CartEntry, Item},
};

#[derive(FromRow)]
struct CartLineRow {
    cart_id: i32,
    amount: i32,
    item_id: i32,
    name: String,
    price: Decimal,
    description: Option<String>,
    detail: Option<String>,
    detail_image: Option<String>,
    max_amount: i32,
    stock: i32,
    sub_category_id: i32,
}

pub async fn find(
    orm: &OrmConn,
    user_id: i32,
    item_id: i32,
) -> AppResult<Option<entity::carts::Model>> {
    let found = Carts::find()
        .filter(CartCol::UserId.eq(user_id))
        .filter(CartCol::ItemId.eq(item_id))
        .one(orm)
        .await?;
    Ok(found)
}

/// Add a cart line, or replace the amount when the item is already carted.
pub async fn upsert(
    orm: &OrmConn,
    user_id: i32,
    item_id: i32,
    amount: i32,
) -> AppResult<CartEntry> {
    let entry = match find(orm, user_id, item_id).await? {
        Some(existing) => {
            let mut active: entity::carts::ActiveModel = existing.into();
            active.amount = Set(amount);
            active.update(orm).await?
        }
        None => {
            let active = entity::carts::ActiveModel {
                user_id: Set(user_id),
                item_id: Set(item_id),
                amount: Set(amount),
                ..Default::default()
            };
            active.insert(orm).await?
        }
    };
    Ok(cart_from_entity(entry))
}

pub async fn remove(orm: &OrmConn, user_id: i32, item_id: i32) -> AppResult<u64> {
    let result = Carts::delete_many()
        .filter(CartCol::UserId.eq(user_id))
        .filter(CartCol::ItemId.eq(item_id))
        .exec(orm)
        .await?;
    Ok(result.rows_affected)
}

/// Cart lines joined with their item, most recent first.
pub async fn list(
    pool: &DbPool,
    user_id: i32,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<CartLine>> {
    let rows = sqlx::query_as::<_, CartLineRow>(
        r#"
        SELECT carts.id AS cart_id, carts.amount,
               items.id AS item_id, items.name, items.price, items.description,
               items.detail, items.detail_image, items.max_amount, items.stock,
               items.sub_category_id
        FROM carts
        JOIN items ON items.id = carts.item_id
        WHERE carts.user_id = $1
        ORDER BY carts.id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let lines = rows
        .into_iter()
        .map(|row| CartLine {
            id: row.cart_id,
            amount: row.amount,
            item: Item {
                id: row.item_id,
                name: row.name,
                price: row.price,
                description: row.description,
                detail: row.detail,
                detail_image: row.detail_image,
                max_amount: row.max_amount,
                stock: row.stock,
                sub_category_id: row.sub_category_id,
                like_count: None,
            },
        })
        .collect();
    Ok(lines)
}

fn cart_from_entity(model: entity::carts::Model) -> CartEntry {
    CartEntry {
        id: model.id,
        user_id: model.user_id,
        item_id: model.item_id,
        amount: model.amount,
    }
}
