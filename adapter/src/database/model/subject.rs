use kernel::model::{id::SubjectId, subject::Subject};

#[derive(sqlx::FromRow)]
pub struct SubjectRow {
    pub subject_id: SubjectId,
    pub name: String,
}

impl From<SubjectRow> for Subject {
    fn from(value: SubjectRow) -> Self {
        let SubjectRow { subject_id, name } = value;
        Subject { subject_id, name }
    }
}
