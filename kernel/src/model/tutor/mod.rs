use crate::model::{
    id::{SubjectId, TutorProfileId, UserId},
    subject::Subject,
};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct TutorProfile {
    pub id: TutorProfileId,
    pub owner: TutorOwner,
    pub bio: Option<String>,
    pub fee: f64,
    pub location: Option<String>,
    pub is_online: bool,
    pub experience_years: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub subjects: Vec<Subject>,
    pub average_rating: Option<f64>,
}

#[derive(Debug)]
pub struct TutorOwner {
    pub user_id: UserId,
    pub user_name: String,
}

// /tutors/ の絞り込み条件。None のフィールドは条件に含めない。
#[derive(Debug, Default)]
pub struct TutorListOptions {
    pub location: Option<String>,
    pub is_online: Option<bool>,
    pub subject_id: Option<SubjectId>,
    pub search: Option<String>,
}
