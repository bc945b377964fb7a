use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    review::{event::CreateReview, Review},
};
use serde::{Deserialize, Serialize};

fn default_rating() -> i32 {
    5
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub tutor: UserId,
    // 下限のみ検査する。上限は設けない
    #[garde(range(min = 1))]
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[garde(skip)]
    pub comment: Option<String>,
}

#[derive(new)]
pub struct CreateReviewRequestWithUserId(pub UserId, pub CreateReviewRequest);

impl From<CreateReviewRequestWithUserId> for CreateReview {
    fn from(value: CreateReviewRequestWithUserId) -> Self {
        let CreateReviewRequestWithUserId(student_id, request) = value;
        let CreateReviewRequest {
            tutor,
            rating,
            comment,
        } = request;
        CreateReview {
            student_id,
            tutor_id: tutor,
            rating,
            comment: comment.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub student: String,
    pub student_name: String,
    pub tutor: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            id,
            student_id,
            student_name,
            tutor_id,
            rating,
            comment,
            created_at,
        } = value;
        Self {
            id: id.to_string(),
            student: student_id.to_string(),
            student_name,
            tutor: tutor_id.to_string(),
            rating,
            comment,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub items: Vec<ReviewResponse>,
}

impl From<Vec<Review>> for ReviewsResponse {
    fn from(value: Vec<Review>) -> Self {
        Self {
            items: value.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_rating_defaults_to_five() {
        let body = format!(r#"{{"tutor": "{}"}}"#, UserId::new());
        let req: CreateReviewRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(req.rating, 5);
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn zero_rating_is_rejected() {
        let body = format!(r#"{{"tutor": "{}", "rating": 0}}"#, UserId::new());
        let req: CreateReviewRequest = serde_json::from_str(&body).unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn rating_has_no_upper_bound() {
        let body = format!(r#"{{"tutor": "{}", "rating": 6}}"#, UserId::new());
        let req: CreateReviewRequest = serde_json::from_str(&body).unwrap();
        assert!(req.validate(&()).is_ok());
    }
}
