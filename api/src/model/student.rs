use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    student::{event::UpdateStudentProfile, StudentProfile},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentProfileRequest {
    #[garde(skip)]
    pub preferred_location: Option<String>,
}

#[derive(new)]
pub struct UpdateStudentProfileRequestWithUserId(pub UserId, pub UpdateStudentProfileRequest);

impl From<UpdateStudentProfileRequestWithUserId> for UpdateStudentProfile {
    fn from(value: UpdateStudentProfileRequestWithUserId) -> Self {
        let UpdateStudentProfileRequestWithUserId(user_id, request) = value;
        let UpdateStudentProfileRequest { preferred_location } = request;
        UpdateStudentProfile {
            user_id,
            preferred_location: preferred_location.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfileResponse {
    pub id: String,
    pub user_id: String,
    pub preferred_location: String,
}

impl From<StudentProfile> for StudentProfileResponse {
    fn from(value: StudentProfile) -> Self {
        let StudentProfile {
            id,
            user_id,
            preferred_location,
        } = value;
        Self {
            id: id.to_string(),
            user_id: user_id.to_string(),
            preferred_location,
        }
    }
}
