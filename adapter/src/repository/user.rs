use crate::database::{model::user::StudentSummaryRow, ConnectionPool};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{StudentProfileId, TutorProfileId, UserId},
    role::Role,
    user::{event::CreateUser, StudentSummary, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // アカウント作成を行う
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 同じ username のアカウントが存在しないか
        // - 同じ email のアカウントが存在しないか
        //
        // ストアの一意制約と重複するが、フィールド単位のエラーメッセージを
        // 返すためにここで明示的に確認する
        {
            let username_taken = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM users WHERE user_name = $1)",
            )
            .bind(&event.user_name)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if username_taken {
                return Err(AppError::UnprocessableEntity(
                    "This username is already taken.".into(),
                ));
            }

            let email_taken = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)",
            )
            .bind(&event.email)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if email_taken {
                return Err(AppError::UnprocessableEntity(
                    "This email is already registered.".into(),
                ));
            }
        }

        let user_id = UserId::new();
        let password_hash = hash_password(&event.password)?;

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, role, phone)
                VALUES ($1, $2, $3, $4, $5, $6)
                ;
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.role)
        .bind(&event.phone)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        // ロールに応じたプロフィール行を作成する。
        // ON CONFLICT DO NOTHING により create-if-absent として冪等になる
        match event.role {
            Role::Tutor => {
                sqlx::query(
                    r#"
                        INSERT INTO tutor_profiles (tutor_profile_id, user_id)
                        VALUES ($1, $2)
                        ON CONFLICT (user_id) DO NOTHING
                        ;
                    "#,
                )
                .bind(TutorProfileId::new())
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
            }
            Role::Student => {
                sqlx::query(
                    r#"
                        INSERT INTO student_profiles (student_profile_id, user_id)
                        VALUES ($1, $2)
                        ON CONFLICT (user_id) DO NOTHING
                        ;
                    "#,
                )
                .bind(StudentProfileId::new())
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            role: event.role,
            phone: event.phone,
            is_active: true,
        })
    }

    // tutor に予約を入れたことのある学生を重複なしで取得する。
    // 完了済みセッション数と、その学生がこの tutor に付けた評価の平均を添える
    async fn find_students_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<StudentSummary>> {
        sqlx::query_as::<_, StudentSummaryRow>(
            r#"
                SELECT
                u.user_id,
                u.user_name,
                u.email,
                (
                    SELECT COUNT(*)
                    FROM bookings b
                    WHERE b.tutor_id = $1
                      AND b.student_id = u.user_id
                      AND b.status = 'completed'
                ) AS total_sessions,
                (
                    SELECT AVG(r.rating)::float8
                    FROM reviews r
                    WHERE r.tutor_id = $1
                      AND r.student_id = u.user_id
                ) AS average_rating
                FROM users AS u
                WHERE u.role = 'student'
                  AND u.user_id IN (
                    SELECT DISTINCT student_id FROM bookings WHERE tutor_id = $1
                  )
                ORDER BY u.user_name ASC
                ;
            "#,
        )
        .bind(tutor_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(StudentSummary::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

impl UserRepositoryImpl {
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

pub(crate) fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHashError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("secret-password").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"secret-password", &parsed)
            .is_ok());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("secret-password").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"wrong-password", &parsed)
            .is_err());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("secret-password").unwrap();
        let second = hash_password("secret-password").unwrap();
        assert_ne!(first, second);
    }

    #[sqlx::test]
    async fn registering_tutor_creates_exactly_one_tutor_profile(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let user = repo
            .create(CreateUser::new(
                "bob".into(),
                "bob@example.com".into(),
                "secret1".into(),
                Role::Tutor,
                None,
            ))
            .await?;

        let tutor_profiles: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tutor_profiles WHERE user_id = $1")
                .bind(user.user_id)
                .fetch_one(&pool)
                .await?;
        let student_profiles: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM student_profiles WHERE user_id = $1")
                .bind(user.user_id)
                .fetch_one(&pool)
                .await?;

        assert_eq!(tutor_profiles, 1);
        assert_eq!(student_profiles, 0);
        Ok(())
    }

    #[sqlx::test]
    async fn registering_student_creates_exactly_one_student_profile(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let user = repo
            .create(CreateUser::new(
                "alice".into(),
                "alice@example.com".into(),
                "secret1".into(),
                Role::Student,
                None,
            ))
            .await?;

        let student_profiles: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM student_profiles WHERE user_id = $1")
                .bind(user.user_id)
                .fetch_one(&pool)
                .await?;
        let tutor_profiles: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tutor_profiles WHERE user_id = $1")
                .bind(user.user_id)
                .fetch_one(&pool)
                .await?;

        assert_eq!(student_profiles, 1);
        assert_eq!(tutor_profiles, 0);
        Ok(())
    }

    #[sqlx::test]
    async fn duplicate_username_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser::new(
            "bob".into(),
            "bob@example.com".into(),
            "secret1".into(),
            Role::Student,
            None,
        ))
        .await?;

        let res = repo
            .create(CreateUser::new(
                "bob".into(),
                "another@example.com".into(),
                "secret1".into(),
                Role::Student,
                None,
            ))
            .await;

        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }
}
