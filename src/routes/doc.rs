use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        carts::{AddToCartRequest, CartLine, CartLineList},
        categories::{CategoryList, CategoryTree},
        items::{ItemList, UpdateItemQuery},
        likes::{LikeRequest, LikedItemList},
        users::{SignInRequest, SignUpRequest, TokenResponse},
    },
    models::{CartEntry, Item, MainCategory, SubCategory, User},
    response::{ApiMessage, ApiResponse},
    routes::{carts, categories, health, items, likes, params, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        items::list_items,
        items::new_items,
        items::get_item,
        items::delete_item,
        items::update_item,
        users::sign_up,
        users::sign_in,
        users::get_admin,
        likes::list_likes,
        likes::like_item,
        likes::unlike_item,
        carts::list_cart,
        carts::add_to_cart,
        carts::remove_from_cart,
        categories::list_categories
    ),
    components(
        schemas(
            Item,
            User,
            MainCategory,
            SubCategory,
            CartEntry,
            ItemList,
            UpdateItemQuery,
            SignUpRequest,
            SignInRequest,
            TokenResponse,
            LikeRequest,
            LikedItemList,
            AddToCartRequest,
            CartLine,
            CartLineList,
            CategoryTree,
            CategoryList,
            params::Pagination,
            params::ItemListQuery,
            ApiMessage,
            ApiResponse<Item>,
            ApiResponse<ItemList>,
            ApiResponse<User>,
            ApiResponse<TokenResponse>,
            ApiResponse<CartEntry>,
            ApiResponse<CartLineList>,
            ApiResponse<LikedItemList>,
            ApiResponse<CategoryList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Items", description = "Catalog item endpoints"),
        (name = "Users", description = "Signup, signin and admin endpoints"),
        (name = "Likes", description = "Like endpoints"),
        (name = "Carts", description = "Cart endpoints"),
        (name = "Categories", description = "Category taxonomy endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
