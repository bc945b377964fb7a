use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingStatus},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約を作成する。status は常に pending で開始する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 学生としての自分の予約一覧
    async fn find_by_student_id(&self, student_id: UserId) -> AppResult<Vec<Booking>>;
    // tutor として受けている予約一覧
    async fn find_by_tutor_id(&self, tutor_id: UserId) -> AppResult<Vec<Booking>>;
    // (booking_id, tutor_id) で絞り込んで status を無条件に上書きする。
    // 該当行がなければ EntityNotFound
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()>;
}
