use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Item;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub item_id: i32,
    pub amount: i32,
}

/// Cart row joined with its item, the shape the cart listing responds with.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartLine {
    pub id: i32,
    pub item: Item,
    pub amount: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CartLineList {
    #[schema(value_type = Vec<CartLine>)]
    pub items: Vec<CartLine>,
}
