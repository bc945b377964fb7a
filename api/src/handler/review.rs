use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::TutorProfileId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::review::{CreateReviewRequest, CreateReviewRequestWithUserId, ReviewsResponse},
};

// tutor プロフィール ID からオーナーのユーザー ID を引いてレビューを返す
pub async fn show_tutor_reviews(
    Path(tutor_profile_id): Path<TutorProfileId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    let tutor = registry
        .tutor_repository()
        .find_by_id(tutor_profile_id)
        .await?
        .ok_or(AppError::EntityNotFound("Tutor not found".into()))?;

    registry
        .review_repository()
        .find_by_tutor_id(tutor.owner.user_id)
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}

pub async fn register_review(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let review_id = registry
        .review_repository()
        .create(CreateReviewRequestWithUserId::new(user.id(), req).into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "reviewId": review_id.to_string()
        })),
    ))
}
