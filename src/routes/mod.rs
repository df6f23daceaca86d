use axum::Router;

use crate::state::AppState;

pub mod carts;
pub mod categories;
pub mod doc;
pub mod health;
pub mod items;
pub mod likes;
pub mod params;
pub mod users;

// Build the API router without binding state; it is provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/users", users::router())
        .nest("/likes", likes::router())
        .nest("/carts", carts::router())
        .nest("/categories", categories::router())
}
