use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;

use crate::{
    dto::users::{Claims, SignInRequest, SignUpRequest, TokenResponse},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::User,
    repositories::user_repository,
    state::AppState,
};

pub async fn sign_up(state: &AppState, payload: SignUpRequest) -> AppResult<User> {
    let SignUpRequest {
        name,
        email,
        password,
        address,
        phone_number,
    } = payload;

    if user_repository::find_by_email(&state.orm, &email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    user_repository::create_user(&state.orm, name, email, password_hash, address, phone_number)
        .await
}

pub async fn sign_in(state: &AppState, payload: SignInRequest) -> AppResult<TokenResponse> {
    let SignInRequest { email, password } = payload;

    let user = user_repository::find_by_email(&state.orm, &email)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid email or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::BadRequest("Invalid email or password".to_string()));
    }

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role.clone(),
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(TokenResponse { token })
}

pub async fn get_admin(state: &AppState, user: &AuthUser) -> AppResult<User> {
    ensure_admin(user)?;
    user_repository::find_by_id(&state.orm, user.user_id)
        .await?
        .ok_or(AppError::NotFound)
}
