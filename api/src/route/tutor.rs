use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    review::show_tutor_reviews,
    tutor::{
        favorite_tutors, register_tutor_profile, show_my_tutor_profile, show_tutor,
        show_tutor_list, update_tutor_profile,
    },
};

// 認証不要の公開側
pub fn build_public_tutor_routers() -> Router<AppRegistry> {
    let tutors_routers = Router::new()
        .route("/", get(show_tutor_list))
        .route("/:tutor_profile_id/", get(show_tutor))
        .route("/:tutor_profile_id/reviews/", get(show_tutor_reviews));

    Router::new().nest("/tutors", tutors_routers)
}

pub fn build_tutor_profile_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/tutor-profile/", get(show_my_tutor_profile))
        .route("/tutor-profile/create/", post(register_tutor_profile))
        .route("/tutor-profile/update/", put(update_tutor_profile))
        .route(
            "/favorite-tutors/",
            get(favorite_tutors).post(favorite_tutors),
        )
}
