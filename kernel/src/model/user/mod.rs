use crate::model::{id::UserId, role::Role};
pub mod event;

#[derive(Debug, PartialEq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub is_active: bool,
}

// my-students 用の集計済みビュー
#[derive(Debug)]
pub struct StudentSummary {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub total_sessions: i64,
    pub average_rating: Option<f64>,
}
