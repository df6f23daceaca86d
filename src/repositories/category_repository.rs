use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    db::OrmConn,
    entity::{
        MainCategories, SubCategories, main_categories::Column as MainCol,
        sub_categories::Column as SubCol,
    },
    error::AppResult,
    models::{MainCategory, SubCategory},
};

pub async fn main_categories(orm: &OrmConn) -> AppResult<Vec<MainCategory>> {
    let models = MainCategories::find()
        .order_by_asc(MainCol::Id)
        .all(orm)
        .await?;
    Ok(models
        .into_iter()
        .map(|m| MainCategory {
            id: m.id,
            name: m.name,
            description: m.description,
        })
        .collect())
}

pub async fn sub_categories(orm: &OrmConn) -> AppResult<Vec<SubCategory>> {
    let models = SubCategories::find()
        .order_by_asc(SubCol::Id)
        .all(orm)
        .await?;
    Ok(models
        .into_iter()
        .map(|m| SubCategory {
            id: m.id,
            name: m.name,
            main_category_id: m.main_category_id,
        })
        .collect())
}
