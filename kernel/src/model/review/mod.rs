use crate::model::id::{ReviewId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct Review {
    pub id: ReviewId,
    pub student_id: UserId,
    pub student_name: String,
    pub tutor_id: UserId,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
