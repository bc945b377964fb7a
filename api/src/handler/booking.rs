use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{event::UpdateBookingStatus, BookingStatus},
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        booking::{BookingsResponse, CreateBookingRequest, CreateBookingRequestWithUserId},
        user::MyStudentsResponse,
    },
};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let booking_id = registry
        .booking_repository()
        .create(CreateBookingRequestWithUserId::new(user.id(), req).into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "bookingId": booking_id.to_string()
        })),
    ))
}

pub async fn show_my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_student_id(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_tutor_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_tutor_id(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_my_students(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MyStudentsResponse>> {
    registry
        .user_repository()
        .find_students_by_tutor_id(user.id())
        .await
        .map(MyStudentsResponse::from)
        .map(Json)
}

// ステータス更新は (booking_id, 自分の tutor_id) の一致だけを条件にする。
// 遷移順は検査しない
async fn set_booking_status(
    user: AuthorizedUser,
    booking_id: BookingId,
    registry: AppRegistry,
    status: BookingStatus,
    message: &str,
) -> AppResult<Json<serde_json::Value>> {
    registry
        .booking_repository()
        .update_status(UpdateBookingStatus {
            booking_id,
            tutor_id: user.id(),
            status,
        })
        .await?;

    Ok(Json(serde_json::json!({ "message": message })))
}

pub async fn accept_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<serde_json::Value>> {
    set_booking_status(
        user,
        booking_id,
        registry,
        BookingStatus::Accepted,
        "Booking accepted",
    )
    .await
}

pub async fn reject_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<serde_json::Value>> {
    set_booking_status(
        user,
        booking_id,
        registry,
        BookingStatus::Rejected,
        "Booking rejected",
    )
    .await
}

pub async fn complete_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<serde_json::Value>> {
    set_booking_status(
        user,
        booking_id,
        registry,
        BookingStatus::Completed,
        "Booking completed",
    )
    .await
}
