use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{SubjectId, UserId},
    tutor::{
        event::{CreateTutorProfile, UpdateTutorProfile},
        TutorListOptions, TutorProfile,
    },
};
use serde::{Deserialize, Serialize};

use crate::model::subject::SubjectResponse;

fn default_is_online() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTutorProfileRequest {
    #[garde(skip)]
    pub bio: Option<String>,
    #[garde(range(min = 0.0))]
    pub fee: f64,
    #[garde(skip)]
    pub location: Option<String>,
    // 指定がなければオンライン対応とみなす
    #[garde(skip)]
    #[serde(default = "default_is_online")]
    pub is_online: bool,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub experience_years: i32,
    #[garde(skip)]
    #[serde(default)]
    pub subjects: Vec<SubjectId>,
}

#[derive(new)]
pub struct CreateTutorProfileRequestWithUserId(pub UserId, pub CreateTutorProfileRequest);

impl From<CreateTutorProfileRequestWithUserId> for CreateTutorProfile {
    fn from(value: CreateTutorProfileRequestWithUserId) -> Self {
        let CreateTutorProfileRequestWithUserId(user_id, request) = value;
        let CreateTutorProfileRequest {
            bio,
            fee,
            location,
            is_online,
            experience_years,
            subjects,
        } = request;
        CreateTutorProfile {
            user_id,
            bio,
            fee,
            location,
            is_online,
            experience_years,
            subject_ids: subjects,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorProfileRequest {
    #[garde(skip)]
    pub bio: Option<String>,
    #[garde(inner(range(min = 0.0)))]
    pub fee: Option<f64>,
    #[garde(skip)]
    pub location: Option<String>,
    #[garde(skip)]
    pub is_online: Option<bool>,
    #[garde(inner(range(min = 0)))]
    pub experience_years: Option<i32>,
    #[garde(skip)]
    pub is_active: Option<bool>,
    #[garde(skip)]
    pub subjects: Option<Vec<SubjectId>>,
}

#[derive(new)]
pub struct UpdateTutorProfileRequestWithUserId(pub UserId, pub UpdateTutorProfileRequest);

impl From<UpdateTutorProfileRequestWithUserId> for UpdateTutorProfile {
    fn from(value: UpdateTutorProfileRequestWithUserId) -> Self {
        let UpdateTutorProfileRequestWithUserId(user_id, request) = value;
        let UpdateTutorProfileRequest {
            bio,
            fee,
            location,
            is_online,
            experience_years,
            is_active,
            subjects,
        } = request;
        UpdateTutorProfile {
            user_id,
            bio,
            fee,
            location,
            is_online,
            experience_years,
            is_active,
            subject_ids: subjects,
        }
    }
}

// クエリ文字列は ?location=&is_online=&subject=&search= をそのまま受ける
#[derive(Debug, Deserialize)]
pub struct TutorListQuery {
    pub location: Option<String>,
    // isOnline と書くクライアントも受け付ける
    #[serde(alias = "isOnline")]
    pub is_online: Option<bool>,
    pub subject: Option<SubjectId>,
    pub search: Option<String>,
}

impl From<TutorListQuery> for TutorListOptions {
    fn from(value: TutorListQuery) -> Self {
        let TutorListQuery {
            location,
            is_online,
            subject,
            search,
        } = value;
        TutorListOptions {
            location,
            is_online,
            subject_id: subject,
            search,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorProfileResponse {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub bio: String,
    pub fee: f64,
    pub location: String,
    pub is_online: bool,
    pub experience_years: i32,
    pub is_active: bool,
    pub subjects: Vec<SubjectResponse>,
    pub average_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<TutorProfile> for TutorProfileResponse {
    fn from(value: TutorProfile) -> Self {
        let TutorProfile {
            id,
            owner,
            bio,
            fee,
            location,
            is_online,
            experience_years,
            is_active,
            created_at,
            subjects,
            average_rating,
        } = value;
        Self {
            id: id.to_string(),
            user_id: owner.user_id.to_string(),
            username: owner.user_name,
            bio: bio.unwrap_or_default(),
            fee,
            location: location.unwrap_or_default(),
            is_online,
            experience_years,
            is_active,
            subjects: subjects.into_iter().map(SubjectResponse::from).collect(),
            average_rating,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorsResponse {
    pub items: Vec<TutorProfileResponse>,
}

impl From<Vec<TutorProfile>> for TutorsResponse {
    fn from(value: Vec<TutorProfile>) -> Self {
        Self {
            items: value.into_iter().map(TutorProfileResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let body = r#"{"fee": 1500.0}"#;
        let req: CreateTutorProfileRequest = serde_json::from_str(body).unwrap();
        assert!(req.validate(&()).is_ok());
        assert!(req.is_online);
        assert_eq!(req.experience_years, 0);
        assert!(req.subjects.is_empty());
    }

    #[test]
    fn list_query_accepts_both_spellings_of_is_online() {
        let q: TutorListQuery = serde_json::from_str(r#"{"is_online": true}"#).unwrap();
        assert_eq!(q.is_online, Some(true));

        let q: TutorListQuery = serde_json::from_str(r#"{"isOnline": false}"#).unwrap();
        assert_eq!(q.is_online, Some(false));
    }

    #[test]
    fn negative_fee_is_rejected() {
        let body = r#"{"fee": -1.0}"#;
        let req: CreateTutorProfileRequest = serde_json::from_str(body).unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn absent_bio_and_location_render_as_empty_strings() {
        use kernel::model::{id::TutorProfileId, tutor::TutorOwner};

        let profile = TutorProfile {
            id: TutorProfileId::new(),
            owner: TutorOwner {
                user_id: UserId::new(),
                user_name: "bob".into(),
            },
            bio: None,
            fee: 2000.0,
            location: None,
            is_online: true,
            experience_years: 3,
            is_active: true,
            created_at: Utc::now(),
            subjects: vec![],
            average_rating: None,
        };
        let res = TutorProfileResponse::from(profile);
        assert_eq!(res.bio, "");
        assert_eq!(res.location, "");
    }
}
