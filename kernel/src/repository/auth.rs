use crate::model::{
    auth::{TokenClaims, TokenPair},
    user::User,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // 資格情報を検証してユーザーを返す。失敗時は UnauthenticatedError
    async fn verify_user(&self, user_name: &str, password: &str) -> AppResult<User>;
    // アクセストークンとリフレッシュトークンのペアを発行する
    fn issue_token_pair(&self, user: &User) -> AppResult<TokenPair>;
    // アクセストークンを検証してクレームを返す（DB 参照なし）
    fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims>;
    // リフレッシュトークンから新しいアクセストークンを発行する
    fn refresh_access_token(&self, refresh_token: &str) -> AppResult<String>;
}
