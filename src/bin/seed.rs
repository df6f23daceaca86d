use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum_catalog_api::{config::AppConfig, db::create_pool};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_admin(&pool, "admin@example.com", "admin123").await?;
    let user_id = ensure_user(&pool, "user@example.com", "user123").await?;
    seed_categories(&pool).await?;
    seed_items(&pool).await?;
    seed_likes(&pool, &[admin_id, user_id]).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_admin(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<i32> {
    ensure_user_with_role(pool, email, password, "admin").await
}

async fn ensure_user(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<i32> {
    ensure_user_with_role(pool, email, password, "user").await
}

async fn ensure_user_with_role(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<i32> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let name = email.split('@').next().unwrap_or(email);
    let (user_id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password, address, phone_number, role)
        VALUES ($1, $2, $3, 'Seoul', '010-0000-0000', $4)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}

async fn seed_categories(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let mains = [
        (1, "Coffee", "Beans and brewed coffee"),
        (2, "Goods", "Brewing gear and merchandise"),
    ];
    for (id, name, description) in mains {
        sqlx::query(
            r#"
            INSERT INTO main_categories (id, name, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }

    let subs = [
        (1, "Hand Drip", 1),
        (2, "Cold Brew", 1),
        (3, "Tumbler", 2),
    ];
    for (id, name, main_category_id) in subs {
        sqlx::query(
            r#"
            INSERT INTO sub_categories (id, name, main_category_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(main_category_id)
        .execute(pool)
        .await?;
    }

    // Explicit ids bypass the identity sequence; move it past them.
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('main_categories', 'id'), (SELECT MAX(id) FROM main_categories))",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('sub_categories', 'id'), (SELECT MAX(id) FROM sub_categories))",
    )
    .execute(pool)
    .await?;

    println!("Seeded categories");
    Ok(())
}

async fn seed_items(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let items = [
        ("Ethiopia Yirgacheffe", Decimal::new(65000, 1), "Floral single origin", 1, true),
        ("Colombia Supremo", Decimal::new(60000, 1), "Balanced daily cup", 1, true),
        ("Cold Brew Original", Decimal::new(55000, 1), "Slow-steeped for 18 hours", 2, false),
        ("Stainless Tumbler", Decimal::new(250000, 1), "Keeps drinks cold all day", 3, false),
    ];

    for (name, price, description, sub_category_id, is_new) in items {
        sqlx::query(
            r#"
            INSERT INTO items (name, price, description, detail, detail_image, max_amount, stock, sub_category_id)
            VALUES ($1, $2, $3, $3, NULL, 10, 100, $4)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(description)
        .bind(sub_category_id)
        .execute(pool)
        .await?;

        if is_new {
            sqlx::query(
                r#"
                INSERT INTO tags_items (tag_id, item_id)
                SELECT tags.id, items.id FROM tags, items
                WHERE tags.name = 'new' AND items.name = $1
                ON CONFLICT (tag_id, item_id) DO NOTHING
                "#,
            )
            .bind(name)
            .execute(pool)
            .await?;
        }
    }

    println!("Seeded items");
    Ok(())
}

async fn seed_likes(pool: &sqlx::PgPool, user_ids: &[i32]) -> anyhow::Result<()> {
    for user_id in user_ids {
        sqlx::query(
            r#"
            INSERT INTO likes (item_id, user_id)
            SELECT items.id, $1 FROM items WHERE items.name = 'Ethiopia Yirgacheffe'
            ON CONFLICT (item_id, user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .execute(pool)
        .await?;
    }

    println!("Seeded likes");
    Ok(())
}
