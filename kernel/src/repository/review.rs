use crate::model::{
    id::{ReviewId, UserId},
    review::{event::CreateReview, Review},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId>;
    async fn find_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<Review>>;
}
