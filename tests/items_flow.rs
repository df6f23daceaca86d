use axum_catalog_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::items::UpdateItemQuery,
    entity::{
        items::ActiveModel as ItemActive, likes::ActiveModel as LikeActive,
        main_categories::ActiveModel as MainCategoryActive,
        sub_categories::ActiveModel as SubCategoryActive,
        tags_items::ActiveModel as TagItemActive, users::ActiveModel as UserActive,
    },
    repositories::item_repository,
    routes::params::{ItemSort, SortDirection},
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};

// Integration flow over the listing and mutation queries: two items in two
// sub categories, item 1 liked twice and item 2 once.
#[tokio::test]
async fn listing_and_mutation_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
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

    let state = setup_state(&database_url).await?;
    seed_catalog(&state).await?;

    // likeCount aggregates the likes table and orders by it.
    let by_likes = item_repository::get_all(
        &state.pool,
        ItemSort::LikeCount,
        SortDirection::Desc,
        10,
        0,
    )
    .await?;
    assert_eq!(by_likes.len(), 2);
    assert_eq!(by_likes[0].id, 1);
    assert_eq!(by_likes[0].like_count, Some(2));
    assert_eq!(by_likes[1].like_count, Some(1));

    let by_likes_asc =
        item_repository::get_all(&state.pool, ItemSort::LikeCount, SortDirection::Asc, 10, 0)
            .await?;
    assert_eq!(by_likes_asc[0].id, 2);

    // Plain sorts order by the literal column and carry no count.
    let by_price =
        item_repository::get_all(&state.pool, ItemSort::Price, SortDirection::Desc, 10, 0).await?;
    assert_eq!(by_price[0].price, Decimal::new(1000, 1));
    assert_eq!(by_price[1].price, Decimal::new(100, 1));
    assert_eq!(by_price[0].like_count, None);

    let by_name =
        item_repository::get_all(&state.pool, ItemSort::Name, SortDirection::Asc, 10, 0).await?;
    assert_eq!(by_name[0].name, "Item1");

    // Pagination walks insertion order.
    let page =
        item_repository::get_all(&state.pool, ItemSort::Default, SortDirection::Asc, 1, 1).await?;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 2);

    // Category filters.
    let main_list = item_repository::get_main_list(
        &state.pool,
        1,
        ItemSort::LikeCount,
        SortDirection::Desc,
        10,
        0,
    )
    .await?;
    assert_eq!(main_list.len(), 1);
    assert_eq!(main_list[0].sub_category_id, 1);
    assert_eq!(main_list[0].like_count, Some(2));

    let sub_list = item_repository::get_sub_list(
        &state.pool,
        2,
        ItemSort::Name,
        SortDirection::Asc,
        10,
        0,
    )
    .await?;
    assert_eq!(sub_list.len(), 1);
    assert_eq!(sub_list[0].sub_category_id, 2);

    // Single item and the tagged "new" listing.
    let found = item_repository::read_item(&state.orm, 1).await?;
    assert_eq!(found.map(|item| item.name), Some("Item1".to_string()));
    assert!(item_repository::read_item(&state.orm, 99).await?.is_none());

    let new_list = item_repository::get_new_list(&state.orm).await?;
    assert_eq!(new_list.len(), 1);
    assert_eq!(new_list[0].id, 1);

    // Partial update by name persists the provided fields only.
    let fields = UpdateItemQuery {
        description: Some("updated".to_string()),
        price: Some(Decimal::new(9990, 1)),
        stock: Some(77),
        ..Default::default()
    };
    let updated = item_repository::update_item(&state.orm, "Item2", fields).await?;
    assert_eq!(updated, 1);
    let item2 = item_repository::read_item(&state.orm, 2).await?.unwrap();
    assert_eq!(item2.description.as_deref(), Some("updated"));
    assert_eq!(item2.price, Decimal::new(9990, 1));
    assert_eq!(item2.stock, 77);
    assert_eq!(item2.name, "Item2");
    assert_eq!(item2.detail.as_deref(), Some("detail2"));

    let missed = item_repository::update_item(&state.orm, "NoSuchItem", UpdateItemQuery {
        stock: Some(1),
        ..Default::default()
    })
    .await?;
    assert_eq!(missed, 0);

    // Delete by name reports the affected count; likes cascade away with it.
    assert_eq!(item_repository::delete_item(&state.orm, "Item1").await?, 1);
    assert!(item_repository::read_item(&state.orm, 1).await?.is_none());
    assert_eq!(item_repository::delete_item(&state.orm, "Item1").await?, 0);

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs; tags keep the seeded `new` row.
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE tags_items, likes, carts, orders, options_items, items, sub_categories, main_categories, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

async fn seed_catalog(state: &AppState) -> anyhow::Result<()> {
    for (id, name) in [(1, "name1"), (2, "name2")] {
        MainCategoryActive {
            id: Set(id),
            name: Set(name.into()),
            description: Set(None),
        }
        .insert(&state.orm)
        .await?;
    }

    for (id, name, main_category_id) in [(1, "name1", 1), (2, "name2", 2)] {
        SubCategoryActive {
            id: Set(id),
            name: Set(name.into()),
            main_category_id: Set(main_category_id),
        }
        .insert(&state.orm)
        .await?;
    }

    let items = [
        (1, "Item1", Decimal::new(1000, 1), "Desc1", "detail1", 1),
        (2, "Item2", Decimal::new(100, 1), "Desc2", "detail2", 2),
    ];
    for (id, name, price, description, detail, sub_category_id) in items {
        ItemActive {
            id: Set(id),
            name: Set(name.into()),
            price: Set(price),
            description: Set(Some(description.into())),
            detail: Set(Some(detail.into())),
            detail_image: Set(Some(detail.into())),
            max_amount: Set(10),
            stock: Set(10),
            sub_category_id: Set(sub_category_id),
        }
        .insert(&state.orm)
        .await?;
    }

    for (id, email) in [(1, "one@example.com"), (2, "two@example.com")] {
        UserActive {
            id: Set(id),
            name: Set("tester".into()),
            email: Set(email.into()),
            password: Set("dummy".into()),
            address: Set("Seoul".into()),
            phone_number: Set("010-0000-0000".into()),
            role: Set("user".into()),
            ..Default::default()
        }
        .insert(&state.orm)
        .await?;
    }

    // Item 1 has two likes, item 2 has one.
    for (id, item_id, user_id) in [(1, 1, 1), (2, 2, 2), (3, 1, 2)] {
        LikeActive {
            id: Set(id),
            item_id: Set(item_id),
            user_id: Set(user_id),
        }
        .insert(&state.orm)
        .await?;
    }

    // Item 1 carries the seeded `new` tag.
    TagItemActive {
        id: Set(1),
        tag_id: Set(item_repository::NEW_TAG_ID),
        item_id: Set(1),
    }
    .insert(&state.orm)
    .await?;

    Ok(())
}
