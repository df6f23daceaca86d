use serde::Serialize;
use utoipa::ToSchema;

use crate::models::SubCategory;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<CategoryTree>)]
    pub items: Vec<CategoryTree>,
}

/// Main category with its sub categories nested, the two-level taxonomy the
/// category listing responds with.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryTree {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sub_categories: Vec<SubCategory>,
}
