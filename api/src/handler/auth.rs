use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use kernel::model::auth::TokenPair;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::auth::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    RegisterResponse,
};

// アカウント作成と同時にロールに応じたプロフィールを作り、トークンを発行する
pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let user = registry.user_repository().create(req.into()).await?;
    let tokens = registry.auth_repository().issue_token_pair(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: user.into(),
            tokens: tokens.into(),
            message: "Registration successful".to_string(),
        }),
    ))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate(&())?;

    let user = registry
        .auth_repository()
        .verify_user(&req.username, &req.password)
        .await?;
    let TokenPair { access, refresh } = registry.auth_repository().issue_token_pair(&user)?;

    Ok(Json(LoginResponse {
        user: user.into(),
        refresh,
        access,
    }))
}

pub async fn refresh_access_token(
    State(registry): State<AppRegistry>,
    Json(req): Json<RefreshTokenRequest>,
) -> AppResult<Json<RefreshTokenResponse>> {
    let access = registry
        .auth_repository()
        .refresh_access_token(&req.refresh)?;

    Ok(Json(RefreshTokenResponse { access }))
}
