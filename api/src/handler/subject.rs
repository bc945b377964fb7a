use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::subject::{CreateSubjectRequest, SubjectsResponse},
};

pub async fn show_subject_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SubjectsResponse>> {
    registry
        .subject_repository()
        .find_all()
        .await
        .map(SubjectsResponse::from)
        .map(Json)
}

pub async fn register_subject(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSubjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let subject_id = registry.subject_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "subjectId": subject_id.to_string()
        })),
    ))
}
