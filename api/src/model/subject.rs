use garde::Validate;
use kernel::model::subject::{event::CreateSubject, Subject};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectRequest {
    #[garde(length(min = 1))]
    pub name: String,
}

impl From<CreateSubjectRequest> for CreateSubject {
    fn from(value: CreateSubjectRequest) -> Self {
        let CreateSubjectRequest { name } = value;
        CreateSubject { name }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResponse {
    pub id: String,
    pub name: String,
}

impl From<Subject> for SubjectResponse {
    fn from(value: Subject) -> Self {
        let Subject { subject_id, name } = value;
        Self {
            id: subject_id.to_string(),
            name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectsResponse {
    pub items: Vec<SubjectResponse>,
}

impl From<Vec<Subject>> for SubjectsResponse {
    fn from(value: Vec<Subject>) -> Self {
        Self {
            items: value.into_iter().map(SubjectResponse::from).collect(),
        }
    }
}
