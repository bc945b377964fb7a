use kernel::model::{
    id::{StudentProfileId, UserId},
    student::StudentProfile,
};

#[derive(sqlx::FromRow)]
pub struct StudentProfileRow {
    pub student_profile_id: StudentProfileId,
    pub user_id: UserId,
    pub preferred_location: String,
}

impl From<StudentProfileRow> for StudentProfile {
    fn from(value: StudentProfileRow) -> Self {
        let StudentProfileRow {
            student_profile_id,
            user_id,
            preferred_location,
        } = value;
        StudentProfile {
            id: student_profile_id,
            user_id,
            preferred_location,
        }
    }
}
