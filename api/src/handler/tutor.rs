use axum::{
    extract::{Path, Query, State},
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
    model::tutor::{
        CreateTutorProfileRequest, CreateTutorProfileRequestWithUserId, TutorListQuery,
        TutorProfileResponse, TutorsResponse, UpdateTutorProfileRequest,
        UpdateTutorProfileRequestWithUserId,
    },
};

// 公開一覧。is_active なプロフィールだけが返る
pub async fn show_tutor_list(
    Query(query): Query<TutorListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TutorsResponse>> {
    registry
        .tutor_repository()
        .find_all(query.into())
        .await
        .map(TutorsResponse::from)
        .map(Json)
}

pub async fn show_tutor(
    Path(tutor_profile_id): Path<TutorProfileId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TutorProfileResponse>> {
    registry
        .tutor_repository()
        .find_by_id(tutor_profile_id)
        .await?
        .ok_or(AppError::EntityNotFound("Tutor not found".into()))
        .map(TutorProfileResponse::from)
        .map(Json)
}

pub async fn show_my_tutor_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TutorProfileResponse>> {
    registry
        .tutor_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or(AppError::EntityNotFound(
            "No tutor profile found. Please create a tutor profile".into(),
        ))
        .map(TutorProfileResponse::from)
        .map(Json)
}

pub async fn register_tutor_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateTutorProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let tutor_profile_id = registry
        .tutor_repository()
        .create(CreateTutorProfileRequestWithUserId::new(user.id(), req).into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "tutorProfileId": tutor_profile_id.to_string()
        })),
    ))
}

pub async fn update_tutor_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateTutorProfileRequest>,
) -> AppResult<Json<TutorProfileResponse>> {
    req.validate(&())?;

    registry
        .tutor_repository()
        .update(UpdateTutorProfileRequestWithUserId::new(user.id(), req).into())
        .await?;

    // 更新後の内容を返す
    registry
        .tutor_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or(AppError::EntityNotFound("No tutor profile found".into()))
        .map(TutorProfileResponse::from)
        .map(Json)
}

// お気に入り機能は未実装のままエンドポイントだけ残している
pub async fn favorite_tutors(_user: AuthorizedUser) -> AppResult<StatusCode> {
    Err(AppError::NotImplemented(
        "Favorite tutors feature is not implemented".into(),
    ))
}
