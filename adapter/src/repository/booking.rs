use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingStatus},
        Booking, BookingStatus,
    },
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // 予約作成を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定の tutor が tutor ロールのユーザーとして存在するか
        // - 指定の科目が存在するか
        {
            let tutor_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM users WHERE user_id = $1 AND role = 'tutor')",
            )
            .bind(event.tutor_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if !tutor_exists {
                return Err(AppError::EntityNotFound("Tutor not found".into()));
            }

            let subject_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM subjects WHERE subject_id = $1)",
            )
            .bind(event.subject_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if !subject_exists {
                return Err(AppError::EntityNotFound("Subject not found".into()));
            }
        }

        // student はリクエスト値ではなく認証済みユーザー、status は常に pending
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, student_id, tutor_id, subject_id, message, status)
                VALUES ($1, $2, $3, $4, $5, $6)
                ;
            "#,
        )
        .bind(booking_id)
        .bind(event.student_id)
        .bind(event.tutor_id)
        .bind(event.subject_id)
        .bind(&event.message)
        .bind(BookingStatus::Pending)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    // 学生 ID に紐づく予約一覧を取得する
    async fn find_by_student_id(&self, student_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.student_id,
                st.user_name AS student_name,
                b.tutor_id,
                tu.user_name AS tutor_name,
                b.subject_id,
                s.name AS subject_name,
                b.message,
                b.status,
                b.created_at
                FROM bookings AS b
                INNER JOIN users AS st ON b.student_id = st.user_id
                INNER JOIN users AS tu ON b.tutor_id = tu.user_id
                INNER JOIN subjects AS s ON b.subject_id = s.subject_id
                WHERE b.student_id = $1
                ORDER BY b.created_at DESC
                ;
            "#,
        )
        .bind(student_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    // tutor ID に紐づく予約一覧を取得する
    async fn find_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.student_id,
                st.user_name AS student_name,
                b.tutor_id,
                tu.user_name AS tutor_name,
                b.subject_id,
                s.name AS subject_name,
                b.message,
                b.status,
                b.created_at
                FROM bookings AS b
                INNER JOIN users AS st ON b.student_id = st.user_id
                INNER JOIN users AS tu ON b.tutor_id = tu.user_id
                INNER JOIN subjects AS s ON b.subject_id = s.subject_id
                WHERE b.tutor_id = $1
                ORDER BY b.created_at DESC
                ;
            "#,
        )
        .bind(tutor_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    // (booking_id, tutor_id) で絞り込んで status を上書きする。
    // 遷移順は意図的に検査しない。completed 後の rejected への上書きも通る
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $1
                WHERE booking_id = $2
                  AND tutor_id = $3
                ;
            "#,
        )
        .bind(event.status)
        .bind(event.booking_id)
        .bind(event.tutor_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Booking not found".into()));
        }

        Ok(())
    }
}

impl BookingRepositoryImpl {
    // create メソッドでのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために
    // 内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{subject::SubjectRepositoryImpl, user::UserRepositoryImpl};
    use kernel::model::{
        id::SubjectId, role::Role, subject::event::CreateSubject, user::event::CreateUser,
    };
    use kernel::repository::{subject::SubjectRepository, user::UserRepository};

    async fn seed(pool: &sqlx::PgPool) -> anyhow::Result<(UserId, UserId, SubjectId)> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let student = users
            .create(CreateUser::new(
                "alice".into(),
                "alice@example.com".into(),
                "secret1".into(),
                Role::Student,
                None,
            ))
            .await?;
        let tutor = users
            .create(CreateUser::new(
                "bob".into(),
                "bob@example.com".into(),
                "secret1".into(),
                Role::Tutor,
                None,
            ))
            .await?;

        let subjects = SubjectRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let subject_id = subjects.create(CreateSubject::new("math".into())).await?;

        Ok((student.user_id, tutor.user_id, subject_id))
    }

    #[sqlx::test]
    async fn status_update_by_non_owner_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (student_id, tutor_id, subject_id) = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(student_id, tutor_id, subject_id, "".into()))
            .await?;

        // 予約の tutor ではないユーザー ID では更新できない
        let res = repo
            .update_status(UpdateBookingStatus::new(
                booking_id,
                student_id,
                BookingStatus::Accepted,
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let bookings = repo.find_by_tutor_id(tutor_id).await?;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].status, BookingStatus::Pending);
        Ok(())
    }

    #[sqlx::test]
    async fn status_can_be_overwritten_in_any_order(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (student_id, tutor_id, subject_id) = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking_id = repo
            .create(CreateBooking::new(student_id, tutor_id, subject_id, "".into()))
            .await?;

        // accept → complete → reject がすべて通る（遷移順は検査しない）
        for status in [
            BookingStatus::Accepted,
            BookingStatus::Completed,
            BookingStatus::Rejected,
        ] {
            repo.update_status(UpdateBookingStatus::new(booking_id, tutor_id, status))
                .await?;
        }

        let bookings = repo.find_by_student_id(student_id).await?;
        assert_eq!(bookings[0].status, BookingStatus::Rejected);
        Ok(())
    }

    #[sqlx::test]
    async fn booking_for_missing_tutor_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (student_id, _, subject_id) = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        // student を tutor として指定しても tutor ロールの検査で弾かれる
        let res = repo
            .create(CreateBooking::new(student_id, student_id, subject_id, "".into()))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
