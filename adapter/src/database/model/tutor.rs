use kernel::model::{
    id::{SubjectId, TutorProfileId, UserId},
    subject::Subject,
    tutor::{TutorOwner, TutorProfile},
};
use sqlx::types::chrono::{DateTime, Utc};

// tutor_profiles と users を JOIN した一覧取得用の型。
// subjects は別クエリで取得して From 後に詰める
#[derive(sqlx::FromRow)]
pub struct TutorProfileRow {
    pub tutor_profile_id: TutorProfileId,
    pub user_id: UserId,
    pub user_name: String,
    pub bio: Option<String>,
    pub fee: f64,
    pub location: Option<String>,
    pub is_online: bool,
    pub experience_years: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub average_rating: Option<f64>,
}

impl From<TutorProfileRow> for TutorProfile {
    fn from(value: TutorProfileRow) -> Self {
        let TutorProfileRow {
            tutor_profile_id,
            user_id,
            user_name,
            bio,
            fee,
            location,
            is_online,
            experience_years,
            is_active,
            created_at,
            average_rating,
        } = value;
        TutorProfile {
            id: tutor_profile_id,
            owner: TutorOwner { user_id, user_name },
            bio,
            fee,
            location,
            is_online,
            experience_years,
            is_active,
            created_at,
            // 科目は tutor_subjects の取得後に差し込む
            subjects: Vec::new(),
            average_rating,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct TutorSubjectRow {
    pub tutor_profile_id: TutorProfileId,
    pub subject_id: SubjectId,
    pub name: String,
}

impl TutorSubjectRow {
    pub fn into_pair(self) -> (TutorProfileId, Subject) {
        (
            self.tutor_profile_id,
            Subject {
                subject_id: self.subject_id,
                name: self.name,
            },
        )
    }
}
