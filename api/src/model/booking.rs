use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingStatus},
    id::{SubjectId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub tutor: UserId,
    #[garde(skip)]
    pub subject: SubjectId,
    #[garde(skip)]
    pub message: Option<String>,
}

#[derive(new)]
pub struct CreateBookingRequestWithUserId(pub UserId, pub CreateBookingRequest);

impl From<CreateBookingRequestWithUserId> for CreateBooking {
    fn from(value: CreateBookingRequestWithUserId) -> Self {
        let CreateBookingRequestWithUserId(student_id, request) = value;
        let CreateBookingRequest {
            tutor,
            subject,
            message,
        } = request;
        CreateBooking {
            student_id,
            tutor_id: tutor,
            subject_id: subject,
            message: message.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub student: String,
    pub student_name: String,
    pub tutor: String,
    pub tutor_name: String,
    pub subject: String,
    pub subject_name: String,
    pub message: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
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
        Self {
            id: id.to_string(),
            student: student_id.to_string(),
            student_name,
            tutor: tutor_id.to_string(),
            tutor_name,
            subject: subject_id.to_string(),
            subject_name,
            message,
            status,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::BookingId;

    #[test]
    fn booking_status_serializes_lowercase() {
        let booking = Booking {
            id: BookingId::new(),
            student_id: UserId::new(),
            student_name: "alice".into(),
            tutor_id: UserId::new(),
            tutor_name: "bob".into(),
            subject_id: SubjectId::new(),
            subject_name: "math".into(),
            message: "".into(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(BookingResponse::from(booking)).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["message"], "");
    }
}
