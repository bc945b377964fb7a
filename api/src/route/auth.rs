use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::{login, refresh_access_token, register_user};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/register/", post(register_user))
        .route("/login/", post(login))
        .route("/token/refresh/", post(refresh_access_token))
}
