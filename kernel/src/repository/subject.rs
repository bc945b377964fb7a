use crate::model::{
    id::SubjectId,
    subject::{event::CreateSubject, Subject},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create(&self, event: CreateSubject) -> AppResult<SubjectId>;
    async fn find_all(&self) -> AppResult<Vec<Subject>>;
}
