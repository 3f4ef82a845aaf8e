use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::provider::{show_provider_contact, show_provider_list};

pub fn build_provider_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_provider_list))
        .route("/:provider_id/contact", get(show_provider_contact));

    Router::new().nest("/providers", routers)
}
