use crate::model::id::{StudentProfileId, UserId};
pub mod event;

#[derive(Debug)]
pub struct StudentProfile {
    pub id: StudentProfileId,
    pub user_id: UserId,
    pub preferred_location: String,
}
