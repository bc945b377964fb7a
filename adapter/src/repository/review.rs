use crate::database::{model::review::ReviewRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ReviewId, UserId},
    review::{event::CreateReview, Review},
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId> {
        let tutor_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE user_id = $1 AND role = 'tutor')",
        )
        .bind(event.tutor_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if !tutor_exists {
            return Err(AppError::EntityNotFound("Tutor not found".into()));
        }

        let review_id = ReviewId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reviews (review_id, student_id, tutor_id, rating, comment)
                VALUES ($1, $2, $3, $4, $5)
                ;
            "#,
        )
        .bind(review_id)
        .bind(event.student_id)
        .bind(event.tutor_id)
        .bind(event.rating)
        .bind(&event.comment)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No review record has been created".into(),
            ));
        }

        Ok(review_id)
    }

    async fn find_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, ReviewRow>(
            r#"
                SELECT
                r.review_id,
                r.student_id,
                u.user_name AS student_name,
                r.tutor_id,
                r.rating,
                r.comment,
                r.created_at
                FROM reviews AS r
                INNER JOIN users AS u ON r.student_id = u.user_id
                WHERE r.tutor_id = $1
                ORDER BY r.created_at DESC
                ;
            "#,
        )
        .bind(tutor_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Review::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
