pub mod cart_service;
pub mod category_service;
pub mod item_service;
pub mod like_service;
pub mod user_service;
