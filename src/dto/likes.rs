use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Item;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LikeRequest {
    pub item_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct LikedItemList {
    #[schema(value_type = Vec<Item>)]
    pub items: Vec<Item>,
}
