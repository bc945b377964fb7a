use kernel::model::{
    id::UserId,
    role::Role,
    user::{StudentSummary, User},
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RoleName {
    Student,
    Tutor,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Student => Self::Student,
            Role::Tutor => Self::Tutor,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Student => Self::Student,
            RoleName::Tutor => Self::Tutor,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: RoleName,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
            ..
        } = value;
        Self {
            id: user_id,
            username: user_name,
            email,
            role: RoleName::from(role),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyStudentsResponse {
    pub items: Vec<StudentSummaryResponse>,
}

impl From<Vec<StudentSummary>> for MyStudentsResponse {
    fn from(value: Vec<StudentSummary>) -> Self {
        Self {
            items: value.into_iter().map(StudentSummaryResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummaryResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub total_sessions: i64,
    pub avg_rating: Option<f64>,
}

impl From<StudentSummary> for StudentSummaryResponse {
    fn from(value: StudentSummary) -> Self {
        let StudentSummary {
            user_id,
            user_name,
            email,
            total_sessions,
            average_rating,
        } = value;
        Self {
            id: user_id,
            username: user_name,
            email,
            total_sessions,
            avg_rating: average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_rejects_unknown_variant() {
        assert!(serde_json::from_str::<RoleName>("\"admin\"").is_err());
        assert!(serde_json::from_str::<RoleName>("\"tutor\"").is_ok());
    }

    #[test]
    fn user_response_uses_wire_field_names() {
        let user = User {
            user_id: UserId::new(),
            user_name: "bob".into(),
            email: "bob@example.com".into(),
            role: Role::Student,
            phone: None,
            is_active: true,
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["username"], "bob");
        assert_eq!(json["role"], "student");
    }
}
