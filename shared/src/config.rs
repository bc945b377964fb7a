use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<AppConfig> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let auth = AuthConfig {
            jwt_secret: std::env::var("JWT_SECRET")?,
            // アクセストークンの有効期限（秒）、デフォルトは 15 分
            access_ttl: std::env::var("ACCESS_TOKEN_TTL")
                .unwrap_or_else(|_| "900".into())
                .parse()?,
            // リフレッシュトークンの有効期限（秒）、デフォルトは 30 日
            refresh_ttl: std::env::var("REFRESH_TOKEN_TTL")
                .unwrap_or_else(|_| "2592000".into())
                .parse()?,
        };
        Ok(AppConfig { database, auth })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_ttl: i64,
    pub refresh_ttl: i64,
}
