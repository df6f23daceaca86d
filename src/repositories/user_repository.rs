use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    db::OrmConn,
    entity::{self, Users, users::Column as UserCol},
    error::AppResult,
    models::User,
};

/// Full row, password hash included; only the auth paths see this shape.
pub async fn find_by_email(orm: &OrmConn, email: &str) -> AppResult<Option<entity::users::Model>> {
    let found = Users::find()
        .filter(UserCol::Email.eq(email))
        .one(orm)
        .await?;
    Ok(found)
}

pub async fn find_by_id(orm: &OrmConn, id: i32) -> AppResult<Option<User>> {
    let found = Users::find_by_id(id).one(orm).await?;
    Ok(found.map(user_from_entity))
}

pub async fn create_user(
    orm: &OrmConn,
    name: String,
    email: String,
    password_hash: String,
    address: String,
    phone_number: String,
) -> AppResult<User> {
    let active = entity::users::ActiveModel {
        name: Set(name),
        email: Set(email),
        password: Set(password_hash),
        address: Set(address),
        phone_number: Set(phone_number),
        role: Set("user".to_string()),
        ..Default::default()
    };
    let user = active.insert(orm).await?;
    Ok(user_from_entity(user))
}

pub fn user_from_entity(model: entity::users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        address: model.address,
        phone_number: model.phone_number,
        role: model.role,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
