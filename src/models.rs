use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Catalog item as returned by the listing and detail endpoints.
///
/// `like_count` is only computed by the `likeCount` sort (the one listing
/// variant that aggregates over the likes table); everywhere else the column
/// is absent from the row and the field stays `None`.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub detail_image: Option<String>,
    pub max_amount: i32,
    pub stock: i32,
    pub sub_category_id: i32,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MainCategory {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SubCategory {
    pub id: i32,
    pub name: String,
    pub main_category_id: i32,
}

/// Raw cart row; the cart listing joins it with its item before responding.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CartEntry {
    pub id: i32,
    pub user_id: i32,
    pub item_id: i32,
    pub amount: i32,
}
