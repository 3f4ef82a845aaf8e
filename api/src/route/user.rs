use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    delete_user, register_client, register_provider, show_current_user, update_profile_picture,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/clients", post(register_client))
        .route("/providers", post(register_provider))
        .route("/me", get(show_current_user))
        .route("/me/picture", put(update_profile_picture))
        .route("/:user_id", delete(delete_user));

    Router::new().nest("/users", routers)
}
