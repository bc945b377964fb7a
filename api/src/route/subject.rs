use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::subject::{register_subject, show_subject_list};

pub fn build_subject_routers() -> Router<AppRegistry> {
    Router::new().route("/subjects/", get(show_subject_list).post(register_subject))
}
