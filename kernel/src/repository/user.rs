use crate::model::{
    id::UserId,
    user::{event::CreateUser, StudentSummary, User},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // アカウントとロールに応じたプロフィール行を同一トランザクションで作成する
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    // tutor に予約を入れたことのある学生の一覧（完了セッション数つき）を取得する
    async fn find_students_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<StudentSummary>>;
}
