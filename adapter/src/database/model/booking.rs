use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, SubjectId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

// bookings に users（学生・tutor 両方）と subjects を JOIN した取得用の型
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
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

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            student_id,
            student_name,
            tutor_id,
            tutor_name,
            subject_id,
            subject_name,
            message,
            status,
            created_at,
        } = value;
        Booking {
            id: booking_id,
            student_id,
            student_name,
            tutor_id,
            tutor_name,
            subject_id,
            subject_name,
            message,
            status,
            created_at,
        }
    }
}
