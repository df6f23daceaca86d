use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tags_items::Entity")]
    TagsItems,
}

impl Related<super::tags_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagsItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
