use crate::database::{
    model::tutor::{TutorProfileRow, TutorSubjectRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{SubjectId, TutorProfileId, UserId},
    subject::Subject,
    tutor::{
        event::{CreateTutorProfile, UpdateTutorProfile},
        TutorListOptions, TutorProfile,
    },
};
use kernel::repository::tutor::TutorRepository;
use shared::error::{AppError, AppResult};
use std::collections::HashMap;

#[derive(new)]
pub struct TutorRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TutorRepository for TutorRepositoryImpl {
    // tutor プロフィール作成を行う
    async fn create(&self, event: CreateTutorProfile) -> AppResult<TutorProfileId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 一意制約に先立って明示的にチェックし、分かりやすいエラーを返す
        {
            let already_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM tutor_profiles WHERE user_id = $1)",
            )
            .bind(event.user_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if already_exists {
                return Err(AppError::UnprocessableEntity(
                    "Tutor profile already exists.".into(),
                ));
            }
        }

        let tutor_profile_id = TutorProfileId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO tutor_profiles
                (tutor_profile_id, user_id, bio, fee, location, is_online, experience_years)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ;
            "#,
        )
        .bind(tutor_profile_id)
        .bind(event.user_id)
        .bind(&event.bio)
        .bind(event.fee)
        .bind(&event.location)
        .bind(event.is_online)
        .bind(event.experience_years)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No tutor profile record has been created".into(),
            ));
        }

        Self::insert_subjects(&mut tx, tutor_profile_id, &event.subject_ids).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(tutor_profile_id)
    }

    // 自分の tutor プロフィールを部分更新する。None のフィールドは据え置き
    async fn update(&self, event: UpdateTutorProfile) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let tutor_profile_id = sqlx::query_scalar::<_, TutorProfileId>(
            r#"
                UPDATE tutor_profiles
                SET
                    bio = COALESCE($1, bio),
                    fee = COALESCE($2, fee),
                    location = COALESCE($3, location),
                    is_online = COALESCE($4, is_online),
                    experience_years = COALESCE($5, experience_years),
                    is_active = COALESCE($6, is_active)
                WHERE user_id = $7
                RETURNING tutor_profile_id
                ;
            "#,
        )
        .bind(&event.bio)
        .bind(event.fee)
        .bind(&event.location)
        .bind(event.is_online)
        .bind(event.experience_years)
        .bind(event.is_active)
        .bind(event.user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(tutor_profile_id) = tutor_profile_id else {
            return Err(AppError::EntityNotFound("No tutor profile found".into()));
        };

        // 科目の指定があれば紐付けを丸ごと入れ替える
        if let Some(subject_ids) = &event.subject_ids {
            sqlx::query("DELETE FROM tutor_subjects WHERE tutor_profile_id = $1")
                .bind(tutor_profile_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

            Self::insert_subjects(&mut tx, tutor_profile_id, subject_ids).await?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    // 公開中の tutor 一覧を絞り込み条件つきで取得する
    async fn find_all(&self, options: TutorListOptions) -> AppResult<Vec<TutorProfile>> {
        let rows = sqlx::query_as::<_, TutorProfileRow>(
            r#"
                SELECT
                t.tutor_profile_id,
                t.user_id,
                u.user_name,
                t.bio,
                t.fee,
                t.location,
                t.is_online,
                t.experience_years,
                t.is_active,
                t.created_at,
                (
                    SELECT AVG(r.rating)::float8
                    FROM reviews r
                    WHERE r.tutor_id = t.user_id
                ) AS average_rating
                FROM tutor_profiles AS t
                INNER JOIN users AS u ON t.user_id = u.user_id
                WHERE t.is_active = TRUE
                  AND u.is_active = TRUE
                  AND ($1::varchar IS NULL OR t.location = $1)
                  AND ($2::boolean IS NULL OR t.is_online = $2)
                  AND ($3::uuid IS NULL OR EXISTS (
                        SELECT 1 FROM tutor_subjects ts
                        WHERE ts.tutor_profile_id = t.tutor_profile_id
                          AND ts.subject_id = $3
                  ))
                  AND ($4::varchar IS NULL
                       OR u.user_name ILIKE '%' || $4 || '%'
                       OR t.bio ILIKE '%' || $4 || '%'
                       OR EXISTS (
                            SELECT 1 FROM tutor_subjects ts
                            INNER JOIN subjects s ON s.subject_id = ts.subject_id
                            WHERE ts.tutor_profile_id = t.tutor_profile_id
                              AND s.name ILIKE '%' || $4 || '%'
                  ))
                ORDER BY t.created_at DESC
                ;
            "#,
        )
        .bind(&options.location)
        .bind(options.is_online)
        .bind(options.subject_id)
        .bind(&options.search)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        self.attach_subjects(rows).await
    }

    async fn find_by_id(
        &self,
        tutor_profile_id: TutorProfileId,
    ) -> AppResult<Option<TutorProfile>> {
        let row = sqlx::query_as::<_, TutorProfileRow>(
            r#"
                SELECT
                t.tutor_profile_id,
                t.user_id,
                u.user_name,
                t.bio,
                t.fee,
                t.location,
                t.is_online,
                t.experience_years,
                t.is_active,
                t.created_at,
                (
                    SELECT AVG(r.rating)::float8
                    FROM reviews r
                    WHERE r.tutor_id = t.user_id
                ) AS average_rating
                FROM tutor_profiles AS t
                INNER JOIN users AS u ON t.user_id = u.user_id
                WHERE t.tutor_profile_id = $1
                ;
            "#,
        )
        .bind(tutor_profile_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            None => Ok(None),
            Some(row) => Ok(self.attach_subjects(vec![row]).await?.pop()),
        }
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<TutorProfile>> {
        let row = sqlx::query_as::<_, TutorProfileRow>(
            r#"
                SELECT
                t.tutor_profile_id,
                t.user_id,
                u.user_name,
                t.bio,
                t.fee,
                t.location,
                t.is_online,
                t.experience_years,
                t.is_active,
                t.created_at,
                (
                    SELECT AVG(r.rating)::float8
                    FROM reviews r
                    WHERE r.tutor_id = t.user_id
                ) AS average_rating
                FROM tutor_profiles AS t
                INNER JOIN users AS u ON t.user_id = u.user_id
                WHERE t.user_id = $1
                ;
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            None => Ok(None),
            Some(row) => Ok(self.attach_subjects(vec![row]).await?.pop()),
        }
    }
}

impl TutorRepositoryImpl {
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

    // 存在する科目のみを紐付ける（未知の ID は黙って読み飛ばす）
    async fn insert_subjects(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tutor_profile_id: TutorProfileId,
        subject_ids: &[SubjectId],
    ) -> AppResult<()> {
        if subject_ids.is_empty() {
            return Ok(());
        }
        let raw_ids: Vec<uuid::Uuid> = subject_ids.iter().map(|id| id.raw()).collect();
        sqlx::query(
            r#"
                INSERT INTO tutor_subjects (tutor_profile_id, subject_id)
                SELECT $1, s.subject_id
                FROM subjects s
                WHERE s.subject_id = ANY($2)
                ON CONFLICT DO NOTHING
                ;
            "#,
        )
        .bind(tutor_profile_id)
        .bind(&raw_ids)
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // 一覧・単体取得の後段で科目を差し込むために内部的に使うメソッド
    async fn attach_subjects(
        &self,
        rows: Vec<TutorProfileRow>,
    ) -> AppResult<Vec<TutorProfile>> {
        let mut tutors: Vec<TutorProfile> = rows.into_iter().map(TutorProfile::from).collect();
        if tutors.is_empty() {
            return Ok(tutors);
        }

        let profile_ids: Vec<uuid::Uuid> = tutors.iter().map(|t| t.id.raw()).collect();
        let subject_rows = sqlx::query_as::<_, TutorSubjectRow>(
            r#"
                SELECT ts.tutor_profile_id, s.subject_id, s.name
                FROM tutor_subjects AS ts
                INNER JOIN subjects AS s ON s.subject_id = ts.subject_id
                WHERE ts.tutor_profile_id = ANY($1)
                ORDER BY s.name ASC
                ;
            "#,
        )
        .bind(&profile_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut by_profile: HashMap<TutorProfileId, Vec<Subject>> = HashMap::new();
        for row in subject_rows {
            let (profile_id, subject) = row.into_pair();
            by_profile.entry(profile_id).or_default().push(subject);
        }

        for tutor in tutors.iter_mut() {
            if let Some(subjects) = by_profile.remove(&tutor.id) {
                tutor.subjects = subjects;
            }
        }

        Ok(tutors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::{role::Role, user::event::CreateUser};
    use kernel::repository::user::UserRepository;

    #[sqlx::test]
    async fn deactivated_tutor_disappears_from_list(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor = users
            .create(CreateUser::new(
                "bob".into(),
                "bob@example.com".into(),
                "secret1".into(),
                Role::Tutor,
                None,
            ))
            .await?;

        let repo = TutorRepositoryImpl::new(ConnectionPool::new(pool));

        // 登録時に自動作成されたプロフィールが一覧に載る
        let listed = repo.find_all(TutorListOptions::default()).await?;
        assert_eq!(listed.len(), 1);

        repo.update(UpdateTutorProfile::new(
            tutor.user_id,
            None,
            None,
            None,
            None,
            None,
            Some(false),
            None,
        ))
        .await?;

        let listed = repo.find_all(TutorListOptions::default()).await?;
        assert!(listed.is_empty());
        Ok(())
    }
}
