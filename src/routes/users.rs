use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::users::{SignInRequest, SignUpRequest, TokenResponse},
    error::AppResult,
    middleware::auth::AuthUser,
    models::User,
    response::ApiResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/admin", get(get_admin))
}

#[utoipa::path(
    post,
    path = "/users/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Email already taken"),
    ),
    tag = "Users"
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = user_service::sign_up(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(user))))
}

#[utoipa::path(
    post,
    path = "/users/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<TokenResponse>),
        (status = 400, description = "Invalid credentials"),
    ),
    tag = "Users"
)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> AppResult<Json<ApiResponse<TokenResponse>>> {
    let token = user_service::sign_in(&state, payload).await?;
    Ok(Json(ApiResponse::new(token)))
}

#[utoipa::path(
    get,
    path = "/users/admin",
    responses(
        (status = 200, description = "Admin profile", body = ApiResponse<User>),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_admin(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<User>>> {
    let admin = user_service::get_admin(&state, &user).await?;
    Ok(Json(ApiResponse::new(admin)))
}
