use crate::model::user::{RoleName, UserResponse};
use garde::Validate;
use kernel::model::{auth::TokenPair, role::Role, user::event::CreateUser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 6))]
    pub password: String,
    #[garde(skip)]
    pub role: RoleName,
    #[garde(skip)]
    pub phone: Option<String>,
}

impl From<RegisterRequest> for CreateUser {
    fn from(value: RegisterRequest) -> Self {
        let RegisterRequest {
            username,
            email,
            password,
            role,
            phone,
        } = value;
        CreateUser {
            user_name: username,
            email,
            password,
            role: Role::from(role),
            phone,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub refresh: String,
    pub access: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(value: TokenPair) -> Self {
        let TokenPair { access, refresh } = value;
        Self { refresh, access }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub tokens: TokenPairResponse,
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub refresh: String,
    pub access: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret1".into(),
            role: RoleName::Tutor,
            phone: None,
        }
    }

    #[test]
    fn valid_registration_passes_validation() {
        assert!(valid_request().validate(&()).is_ok());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut req = valid_request();
        req.password = "12345".into();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut req = valid_request();
        req.email = "not-an-email".into();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn unknown_role_fails_deserialization() {
        let body = r#"{
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret1",
            "role": "admin"
        }"#;
        assert!(serde_json::from_str::<RegisterRequest>(body).is_err());
    }

    #[test]
    fn request_converts_into_create_user_event() {
        let event = CreateUser::from(valid_request());
        assert_eq!(event.user_name, "alice");
        assert_eq!(event.role, Role::Tutor);
    }
}
