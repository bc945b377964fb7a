use super::BookingStatus;
use crate::model::id::{BookingId, SubjectId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    // 認証済みユーザーを必ず student として設定する（リクエスト値は使わない）
    pub student_id: UserId,
    pub tutor_id: UserId,
    pub subject_id: SubjectId,
    pub message: String,
}

#[derive(Debug, new)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    // 予約の tutor 本人であることを WHERE 句で担保する
    pub tutor_id: UserId,
    pub status: BookingStatus,
}
