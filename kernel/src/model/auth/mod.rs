use crate::model::role::Role;
use serde::{Deserialize, Serialize};

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

// アクセストークン・リフレッシュトークン共通のクレーム。
// username と role を埋め込むことで、検証側は DB を参照せずに認可できる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub role: Role,
    pub token_type: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

#[derive(Debug)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}
