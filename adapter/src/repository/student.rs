use crate::database::{model::student::StudentProfileRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    student::{event::UpdateStudentProfile, StudentProfile},
};
use kernel::repository::student::StudentRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct StudentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl StudentRepository for StudentRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<StudentProfile>> {
        sqlx::query_as::<_, StudentProfileRow>(
            r#"
                SELECT student_profile_id, user_id, preferred_location
                FROM student_profiles
                WHERE user_id = $1
                ;
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(StudentProfile::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateStudentProfile) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE student_profiles
                SET preferred_location = $1
                WHERE user_id = $2
                ;
            "#,
        )
        .bind(&event.preferred_location)
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("No student profile found".into()));
        }

        Ok(())
    }
}
