use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::review::register_review;

pub fn build_review_routers() -> Router<AppRegistry> {
    Router::new().route("/reviews/", post(register_review))
}
