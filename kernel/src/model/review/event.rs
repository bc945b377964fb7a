use crate::model::id::UserId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReview {
    pub student_id: UserId,
    pub tutor_id: UserId,
    pub rating: i32,
    pub comment: String,
}
