pub mod carts;
pub mod items;
pub mod likes;
pub mod main_categories;
pub mod sub_categories;
pub mod tags;
pub mod tags_items;
pub mod users;

pub use carts::Entity as Carts;
pub use items::Entity as Items;
pub use likes::Entity as Likes;
pub use main_categories::Entity as MainCategories;
pub use sub_categories::Entity as SubCategories;
pub use tags::Entity as Tags;
pub use tags_items::Entity as TagsItems;
pub use users::Entity as Users;
