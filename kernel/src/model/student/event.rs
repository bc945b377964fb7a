use crate::model::id::UserId;
use derive_new::new;

#[derive(Debug, new)]
pub struct UpdateStudentProfile {
    pub user_id: UserId,
    pub preferred_location: String,
}
