use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    accept_booking, complete_booking, register_booking, reject_booking, show_my_bookings,
    show_my_students, show_tutor_bookings,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/my-bookings/", get(show_my_bookings).post(register_booking))
        .route("/tutor-bookings/", get(show_tutor_bookings))
        .route("/my-students/", get(show_my_students))
        .route("/bookings/:booking_id/accept/", put(accept_booking))
        .route("/bookings/:booking_id/reject/", put(reject_booking))
        .route("/bookings/:booking_id/complete/", put(complete_booking))
}
