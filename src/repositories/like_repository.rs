use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    db::{DbPool, OrmConn},
    entity::{self, Likes, likes::Column as LikeCol},
    error::AppResult,
    models::Item,
};

pub async fn find(
    orm: &OrmConn,
    user_id: i32,
    item_id: i32,
) -> AppResult<Option<entity::likes::Model>> {
    let found = Likes::find()
        .filter(LikeCol::UserId.eq(user_id))
        .filter(LikeCol::ItemId.eq(item_id))
        .one(orm)
        .await?;
    Ok(found)
}

pub async fn add(orm: &OrmConn, user_id: i32, item_id: i32) -> AppResult<()> {
    let active = entity::likes::ActiveModel {
        user_id: Set(user_id),
        item_id: Set(item_id),
        ..Default::default()
    };
    active.insert(orm).await?;
    Ok(())
}

pub async fn remove(orm: &OrmConn, user_id: i32, item_id: i32) -> AppResult<u64> {
    let result = Likes::delete_many()
        .filter(LikeCol::UserId.eq(user_id))
        .filter(LikeCol::ItemId.eq(item_id))
        .exec(orm)
        .await?;
    Ok(result.rows_affected)
}

/// Items the user liked, most recent like first.
pub async fn list_items(
    pool: &DbPool,
    user_id: i32,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT items.id, items.name, items.price, items.description, items.detail,
               items.detail_image, items.max_amount, items.stock, items.sub_category_id
        FROM likes
        JOIN items ON items.id = likes.item_id
        WHERE likes.user_id = $1
        ORDER BY likes.id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(items)
}
