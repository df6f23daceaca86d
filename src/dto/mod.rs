pub mod carts;
pub mod categories;
pub mod items;
pub mod likes;
pub mod users;
