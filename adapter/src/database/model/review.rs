use kernel::model::{
    id::{ReviewId, UserId},
    review::Review,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub student_id: UserId,
    pub student_name: String,
    pub tutor_id: UserId,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            student_id,
            student_name,
            tutor_id,
            rating,
            comment,
            created_at,
        } = value;
        Review {
            id: review_id,
            student_id,
            student_name,
            tutor_id,
            rating,
            comment,
            created_at,
        }
    }
}
