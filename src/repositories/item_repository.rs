use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Set,
};

use crate::{
    db::{DbPool, OrmConn},
    dto::items::UpdateItemQuery,
    entity::{self, Items, items::Column as ItemCol, tags_items::Column as TagItemCol},
    error::AppResult,
    models::Item,
    routes::params::{ItemSort, SortDirection},
};

/// Tag the "new arrivals" listing filters on; seeded by the tags migration.
pub const NEW_TAG_ID: i32 = 1;

const ITEM_COLUMNS: &str = "items.id, items.name, items.price, items.description, \
     items.detail, items.detail_image, items.max_amount, items.stock, items.sub_category_id";

/// Which rows a listing query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    MainCategory(i32),
    SubCategory(i32),
}

/// Assemble the listing SQL for one filter/sort combination.
///
/// Every dynamic fragment comes from a fixed enum arm; request input only
/// ever enters the query through the positional binds ($1.. filter id, then
/// limit and offset). The `likeCount` sort is the one shape that aggregates:
/// it joins the likes table, groups per item, and carries the count out as
/// the `like_count` column.
fn list_query(filter: ListFilter, sort: ItemSort, direction: SortDirection) -> String {
    let mut sql = String::from("SELECT ");
    sql.push_str(ITEM_COLUMNS);
    if sort.aggregates_likes() {
        sql.push_str(", COUNT(likes.id) AS like_count");
    }
    sql.push_str(" FROM items");

    if matches!(filter, ListFilter::MainCategory(_)) {
        sql.push_str(" JOIN sub_categories ON sub_categories.id = items.sub_category_id");
    }
    if sort.aggregates_likes() {
        sql.push_str(" LEFT JOIN likes ON likes.item_id = items.id");
    }

    match filter {
        ListFilter::All => {}
        ListFilter::MainCategory(_) => {
            sql.push_str(" WHERE sub_categories.main_category_id = $1");
        }
        ListFilter::SubCategory(_) => {
            sql.push_str(" WHERE items.sub_category_id = $1");
        }
    }

    if sort.aggregates_likes() {
        sql.push_str(" GROUP BY items.id");
    }

    sql.push_str(" ORDER BY ");
    sql.push_str(sort.order_column());
    sql.push(' ');
    sql.push_str(direction.as_sql());

    if matches!(filter, ListFilter::All) {
        sql.push_str(" LIMIT $1 OFFSET $2");
    } else {
        sql.push_str(" LIMIT $2 OFFSET $3");
    }

    sql
}

async fn list(
    pool: &DbPool,
    filter: ListFilter,
    sort: ItemSort,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    let sql = list_query(filter, sort, direction);
    let mut query = sqlx::query_as::<_, Item>(&sql);
    match filter {
        ListFilter::All => {}
        ListFilter::MainCategory(id) | ListFilter::SubCategory(id) => {
            query = query.bind(id);
        }
    }
    let items = query.bind(limit).bind(offset).fetch_all(pool).await?;
    Ok(items)
}

pub async fn get_all(
    pool: &DbPool,
    sort: ItemSort,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    list(pool, ListFilter::All, sort, direction, limit, offset).await
}

pub async fn get_main_list(
    pool: &DbPool,
    main_category_id: i32,
    sort: ItemSort,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    list(
        pool,
        ListFilter::MainCategory(main_category_id),
        sort,
        direction,
        limit,
        offset,
    )
    .await
}

pub async fn get_sub_list(
    pool: &DbPool,
    sub_category_id: i32,
    sort: ItemSort,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Item>> {
    list(
        pool,
        ListFilter::SubCategory(sub_category_id),
        sort,
        direction,
        limit,
        offset,
    )
    .await
}

pub async fn read_item(orm: &OrmConn, id: i32) -> AppResult<Option<Item>> {
    let found = Items::find_by_id(id).one(orm).await?;
    Ok(found.map(item_from_entity))
}

/// Items carrying the `new` tag, in insertion order.
pub async fn get_new_list(orm: &OrmConn) -> AppResult<Vec<Item>> {
    let models = Items::find()
        .join(JoinType::InnerJoin, entity::items::Relation::TagsItems.def())
        .filter(TagItemCol::TagId.eq(NEW_TAG_ID))
        .order_by_asc(ItemCol::Id)
        .all(orm)
        .await?;
    Ok(models.into_iter().map(item_from_entity).collect())
}

/// Delete by unique name; the affected-row count is the result (0 when
/// nothing matched).
pub async fn delete_item(orm: &OrmConn, name: &str) -> AppResult<u64> {
    let result = Items::delete_many()
        .filter(ItemCol::Name.eq(name))
        .exec(orm)
        .await?;
    Ok(result.rows_affected)
}

/// Partial update by unique name; only the provided fields are written.
pub async fn update_item(orm: &OrmConn, name: &str, fields: UpdateItemQuery) -> AppResult<u64> {
    let mut active = entity::items::ActiveModel::default();
    if let Some(new_name) = fields.name {
        active.name = Set(new_name);
    }
    if let Some(description) = fields.description {
        active.description = Set(Some(description));
    }
    if let Some(price) = fields.price {
        active.price = Set(price);
    }
    if let Some(detail) = fields.detail {
        active.detail = Set(Some(detail));
    }
    if let Some(max_amount) = fields.max_amount {
        active.max_amount = Set(max_amount);
    }
    if let Some(stock) = fields.stock {
        active.stock = Set(stock);
    }

    let result = Items::update_many()
        .set(active)
        .filter(ItemCol::Name.eq(name))
        .exec(orm)
        .await?;
    Ok(result.rows_affected)
}

pub fn item_from_entity(model: entity::items::Model) -> Item {
    Item {
        id: model.id,
        name: model.name,
        price: model.price,
        description: model.description,
        detail: model.detail,
        detail_image: model.detail_image,
        max_amount: model.max_amount,
        stock: model.stock,
        sub_category_id: model.sub_category_id,
        like_count: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_count_sort_aggregates_over_likes() {
        let sql = list_query(ListFilter::All, ItemSort::LikeCount, SortDirection::Desc);
        assert!(sql.contains("COUNT(likes.id) AS like_count"));
        assert!(sql.contains("LEFT JOIN likes ON likes.item_id = items.id"));
        assert!(sql.contains("GROUP BY items.id"));
        assert!(sql.contains("ORDER BY like_count DESC"));
    }

    #[test]
    fn plain_sorts_order_by_the_literal_column() {
        let by_price = list_query(ListFilter::All, ItemSort::Price, SortDirection::Desc);
        assert!(by_price.contains("ORDER BY items.price DESC"));
        assert!(!by_price.contains("GROUP BY"));

        let by_name = list_query(ListFilter::All, ItemSort::Name, SortDirection::Asc);
        assert!(by_name.contains("ORDER BY items.name ASC"));
    }

    #[test]
    fn default_sort_is_insertion_order() {
        let sql = list_query(ListFilter::All, ItemSort::Default, SortDirection::Asc);
        assert!(sql.contains("ORDER BY items.id ASC"));
        assert!(!sql.contains("likes"));
    }

    #[test]
    fn main_list_joins_and_filters_on_the_main_category() {
        let sql = list_query(
            ListFilter::MainCategory(1),
            ItemSort::Name,
            SortDirection::Asc,
        );
        assert!(sql.contains("JOIN sub_categories ON sub_categories.id = items.sub_category_id"));
        assert!(sql.contains("WHERE sub_categories.main_category_id = $1"));
        assert!(sql.contains("LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn sub_list_filters_on_the_sub_category_column() {
        let sql = list_query(
            ListFilter::SubCategory(2),
            ItemSort::LikeCount,
            SortDirection::Asc,
        );
        assert!(sql.contains("WHERE items.sub_category_id = $1"));
        assert!(sql.contains("ORDER BY like_count ASC"));
        assert!(sql.contains("LIMIT $2 OFFSET $3"));
        // The sub-category filter lives on items itself; no category join.
        assert!(!sql.contains("JOIN sub_categories"));
    }

    #[test]
    fn unfiltered_list_binds_limit_and_offset_first() {
        let sql = list_query(ListFilter::All, ItemSort::Default, SortDirection::Asc);
        assert!(sql.contains("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn main_list_with_like_count_composes_both_joins() {
        let sql = list_query(
            ListFilter::MainCategory(1),
            ItemSort::LikeCount,
            SortDirection::Desc,
        );
        assert!(sql.contains("JOIN sub_categories"));
        assert!(sql.contains("LEFT JOIN likes"));
        assert!(sql.contains("WHERE sub_categories.main_category_id = $1"));
        assert!(sql.contains("GROUP BY items.id"));
        assert!(sql.contains("ORDER BY like_count DESC"));
    }
}
