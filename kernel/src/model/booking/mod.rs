use crate::model::id::{BookingId, SubjectId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

pub mod event;

#[derive(Debug)]
pub struct Booking {
    pub id: BookingId,
    pub student_id: UserId,
    pub student_name: String,
    pub tutor_id: UserId,
    pub tutor_name: String,
    pub subject_id: SubjectId,
    pub subject_name: String,
    pub message: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

// 状態遷移の順序は強制しない。accept/reject/complete の各エンドポイントは
// 現在の状態にかかわらず上書きする（元の挙動を観測可能なまま維持する）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(BookingStatus::Accepted.to_string(), "accepted");
        assert_eq!(BookingStatus::Rejected.to_string(), "rejected");
    }
}
