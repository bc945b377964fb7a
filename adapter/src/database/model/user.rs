use kernel::model::{id::UserId, role::Role, user::StudentSummary};

// 認証時に password_hash まで引くための型
#[derive(sqlx::FromRow)]
pub struct UserWithPasswordRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(sqlx::FromRow)]
pub struct StudentSummaryRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub total_sessions: i64,
    pub average_rating: Option<f64>,
}

impl From<StudentSummaryRow> for StudentSummary {
    fn from(value: StudentSummaryRow) -> Self {
        let StudentSummaryRow {
            user_id,
            user_name,
            email,
            total_sessions,
            average_rating,
        } = value;
        StudentSummary {
            user_id,
            user_name,
            email,
            total_sessions,
            average_rating,
        }
    }
}
