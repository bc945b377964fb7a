mod auth;
mod booking;
mod health;
mod review;
mod student;
mod subject;
mod tutor;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let api_routers = Router::new()
        .merge(auth::build_auth_routers())
        .merge(booking::build_booking_routers())
        .merge(subject::build_subject_routers())
        .merge(student::build_student_routers())
        .merge(review::build_review_routers())
        .merge(tutor::build_tutor_profile_routers());

    Router::new()
        .merge(health::build_health_check_routers())
        .merge(tutor::build_public_tutor_routers())
        .nest("/api", api_routers)
}
