use crate::model::id::{SubjectId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateTutorProfile {
    pub user_id: UserId,
    pub bio: Option<String>,
    pub fee: f64,
    pub location: Option<String>,
    pub is_online: bool,
    pub experience_years: i32,
    pub subject_ids: Vec<SubjectId>,
}

#[derive(Debug, new)]
pub struct UpdateTutorProfile {
    pub user_id: UserId,
    pub bio: Option<String>,
    pub fee: Option<f64>,
    pub location: Option<String>,
    pub is_online: Option<bool>,
    pub experience_years: Option<i32>,
    pub is_active: Option<bool>,
    // Some の場合は科目の紐付けを丸ごと入れ替える
    pub subject_ids: Option<Vec<SubjectId>>,
}
