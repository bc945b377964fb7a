use crate::database::{model::subject::SubjectRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::SubjectId,
    subject::{event::CreateSubject, Subject},
};
use kernel::repository::subject::SubjectRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SubjectRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SubjectRepository for SubjectRepositoryImpl {
    async fn create(&self, event: CreateSubject) -> AppResult<SubjectId> {
        let name_taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM subjects WHERE name = $1)",
        )
        .bind(&event.name)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if name_taken {
            return Err(AppError::UnprocessableEntity(
                "This subject already exists.".into(),
            ));
        }

        let subject_id = SubjectId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO subjects (subject_id, name)
                VALUES ($1, $2)
                ;
            "#,
        )
        .bind(subject_id)
        .bind(&event.name)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No subject record has been created".into(),
            ));
        }

        Ok(subject_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Subject>> {
        sqlx::query_as::<_, SubjectRow>(
            r#"
                SELECT subject_id, name
                FROM subjects
                ORDER BY name ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Subject::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
