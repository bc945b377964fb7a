use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::student::{
        StudentProfileResponse, UpdateStudentProfileRequest, UpdateStudentProfileRequestWithUserId,
    },
};

pub async fn show_my_student_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StudentProfileResponse>> {
    registry
        .student_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or(AppError::EntityNotFound("No student profile found".into()))
        .map(StudentProfileResponse::from)
        .map(Json)
}

pub async fn update_my_student_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateStudentProfileRequest>,
) -> AppResult<Json<StudentProfileResponse>> {
    req.validate(&())?;

    registry
        .student_repository()
        .update(UpdateStudentProfileRequestWithUserId::new(user.id(), req).into())
        .await?;

    registry
        .student_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or(AppError::EntityNotFound("No student profile found".into()))
        .map(StudentProfileResponse::from)
        .map(Json)
}
