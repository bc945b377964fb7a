use crate::model::id::SubjectId;
pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub subject_id: SubjectId,
    pub name: String,
}
