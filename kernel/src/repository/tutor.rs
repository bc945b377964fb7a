use crate::model::{
    id::{TutorProfileId, UserId},
    tutor::{
        event::{CreateTutorProfile, UpdateTutorProfile},
        TutorListOptions, TutorProfile,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TutorRepository: Send + Sync {
    async fn create(&self, event: CreateTutorProfile) -> AppResult<TutorProfileId>;
    async fn update(&self, event: UpdateTutorProfile) -> AppResult<()>;
    // is_active なプロフィールかつ is_active なアカウントのみを返す
    async fn find_all(&self, options: TutorListOptions) -> AppResult<Vec<TutorProfile>>;
    async fn find_by_id(&self, tutor_profile_id: TutorProfileId)
        -> AppResult<Option<TutorProfile>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<TutorProfile>>;
}
