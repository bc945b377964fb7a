use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::student::{show_my_student_profile, update_my_student_profile};

pub fn build_student_routers() -> Router<AppRegistry> {
    Router::new().route(
        "/student-profile/",
        get(show_my_student_profile).put(update_my_student_profile),
    )
}
