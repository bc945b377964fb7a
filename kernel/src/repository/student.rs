use crate::model::{
    id::UserId,
    student::{event::UpdateStudentProfile, StudentProfile},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<StudentProfile>>;
    async fn update(&self, event: UpdateStudentProfile) -> AppResult<()>;
}
