use axum_catalog_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        carts::AddToCartRequest,
        users::{Claims, SignInRequest, SignUpRequest},
    },
    entity::{
        items::ActiveModel as ItemActive, main_categories::ActiveModel as MainCategoryActive,
        sub_categories::ActiveModel as SubCategoryActive, users,
    },
    error::AppError,
    middleware::auth::AuthUser,
    services::{cart_service, like_service, user_service},
    state::AppState,
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, Statement};

const JWT_SECRET: &str = "shop-flow-secret";

// Full shopper journey: signup, signin, like an item, cart it, clean up.
#[tokio::test]
async fn signup_signin_like_and_cart_flow() -> anyhow::Result<()> {
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    // SAFETY: set before any concurrent reads of the environment in this binary.
    unsafe { std::env::set_var("JWT_SECRET", JWT_SECRET) };

    let state = setup_state(&database_url).await?;
    let item_id = seed_item(&state).await?;

    // Signup, and the email cannot be taken twice.
    let signup = SignUpRequest {
        name: "shopper".into(),
        email: "shopper@example.com".into(),
        password: "secret123".into(),
        address: "Seoul".into(),
        phone_number: "010-1234-5678".into(),
    };
    let user = user_service::sign_up(&state, signup).await?;
    assert_eq!(user.role, "user");

    let duplicate = user_service::sign_up(
        &state,
        SignUpRequest {
            name: "copycat".into(),
            email: "shopper@example.com".into(),
            password: "other456".into(),
            address: "Busan".into(),
            phone_number: "010-0000-0000".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    // Signin issues a token whose subject is the user id.
    let token = user_service::sign_in(
        &state,
        SignInRequest {
            email: "shopper@example.com".into(),
            password: "secret123".into(),
        },
    )
    .await?
    .token;

    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(JWT_SECRET.as_bytes()),
        &Validation::default(),
    )?;
    assert_eq!(decoded.claims.sub, user.id.to_string());
    assert_eq!(decoded.claims.role, "user");

    let wrong_password = user_service::sign_in(
        &state,
        SignInRequest {
            email: "shopper@example.com".into(),
            password: "nope".into(),
        },
    )
    .await;
    assert!(matches!(wrong_password, Err(AppError::BadRequest(_))));

    let auth_user = AuthUser {
        user_id: user.id,
        role: user.role.clone(),
    };

    // Likes are idempotent; unliking twice reports the missing row.
    like_service::like_item(&state, &auth_user, item_id).await?;
    like_service::like_item(&state, &auth_user, item_id).await?;
    let liked = like_service::list_liked_items(&state, &auth_user, 20, 0).await?;
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].id, item_id);

    like_service::unlike_item(&state, &auth_user, item_id).await?;
    let gone = like_service::unlike_item(&state, &auth_user, item_id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));

    // Cart amounts are bounded by the item's max_amount.
    let zero = cart_service::add_to_cart(
        &state,
        &auth_user,
        AddToCartRequest { item_id, amount: 0 },
    )
    .await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    let too_many = cart_service::add_to_cart(
        &state,
        &auth_user,
        AddToCartRequest { item_id, amount: 5 },
    )
    .await;
    assert!(matches!(too_many, Err(AppError::BadRequest(_))));

    let entry = cart_service::add_to_cart(
        &state,
        &auth_user,
        AddToCartRequest { item_id, amount: 2 },
    )
    .await?;
    assert_eq!(entry.amount, 2);

    // Carting the same item again replaces the amount instead of adding a line.
    let replaced = cart_service::add_to_cart(
        &state,
        &auth_user,
        AddToCartRequest { item_id, amount: 3 },
    )
    .await?;
    assert_eq!(replaced.id, entry.id);
    assert_eq!(replaced.amount, 3);

    let lines = cart_service::list_cart(&state, &auth_user, 20, 0).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].item.id, item_id);
    assert_eq!(lines[0].amount, 3);

    cart_service::remove_from_cart(&state, &auth_user, item_id).await?;
    let empty = cart_service::remove_from_cart(&state, &auth_user, item_id).await;
    assert!(matches!(empty, Err(AppError::NotFound)));

    // The admin endpoint rejects plain users and serves promoted ones.
    let forbidden = user_service::get_admin(&state, &auth_user).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden)));

    let model = users::Entity::find_by_id(user.id)
        .one(&state.orm)
        .await?
        .expect("seeded user");
    let mut active: users::ActiveModel = model.into();
    active.role = Set("admin".into());
    active.update(&state.orm).await?;

    let auth_admin = AuthUser {
        user_id: user.id,
        role: "admin".into(),
    };
    let profile = user_service::get_admin(&state, &auth_admin).await?;
    assert_eq!(profile.email, "shopper@example.com");

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE tags_items, likes, carts, orders, options_items, items, sub_categories, main_categories, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

async fn seed_item(state: &AppState) -> anyhow::Result<i32> {
    MainCategoryActive {
        id: Set(1),
        name: Set("Coffee".into()),
        description: Set(None),
    }
    .insert(&state.orm)
    .await?;

    SubCategoryActive {
        id: Set(1),
        name: Set("Hand Drip".into()),
        main_category_id: Set(1),
    }
    .insert(&state.orm)
    .await?;

    let item = ItemActive {
        id: Set(1),
        name: Set("Ethiopia Yirgacheffe".into()),
        price: Set(Decimal::new(65000, 1)),
        description: Set(Some("Floral single origin".into())),
        detail: Set(None),
        detail_image: Set(None),
        max_amount: Set(3),
        stock: Set(10),
        sub_category_id: Set(1),
    }
    .insert(&state.orm)
    .await?;

    Ok(item.id)
}
