use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{id::UserId, role::Role};
use registry::AppRegistry;
use shared::error::AppError;

// Bearer トークンを検証して認証済みユーザーを取り出すエクストラクタ。
// クレームに username と role が入っているため DB アクセスは発生しない
pub struct AuthorizedUser {
    pub user_id: UserId,
    pub user_name: String,
    pub role: Role,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }

    pub fn is_tutor(&self) -> bool {
        self.role == Role::Tutor
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthenticatedError)?;

        let claims = registry
            .auth_repository()
            .verify_access_token(bearer.token())?;
        let user_id: UserId = claims.sub.parse()?;

        Ok(Self {
            user_id,
            user_name: claims.username,
            role: claims.role,
        })
    }
}
