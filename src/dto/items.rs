use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Item;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ItemList {
    #[schema(value_type = Vec<Item>)]
    pub items: Vec<Item>,
}

/// Query-parameter payload of `PATCH /items/{item_name}`. Every field is
/// optional, but at least one must be present.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemQuery {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub detail: Option<String>,
    pub max_amount: Option<i32>,
    pub stock: Option<i32>,
}

impl UpdateItemQuery {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.detail.is_none()
            && self.max_amount.is_none()
            && self.stock.is_none()
    }
}
