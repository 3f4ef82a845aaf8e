use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::service::{register_service, show_service_list};

pub fn build_service_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_service))
        .route("/", get(show_service_list));

    Router::new().nest("/services", routers)
}
