use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sub_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub main_category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::main_categories::Entity",
        from = "Column::MainCategoryId",
        to = "super::main_categories::Column::Id"
    )]
    MainCategories,
    #[sea_orm(has_many = "super::items::Entity")]
    Items,
}

impl Related<super::main_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MainCategories.def()
    }
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
