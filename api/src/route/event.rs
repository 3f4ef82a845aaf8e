use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::event::{cancel_event, complete_event, register_event, show_event_list};

pub fn build_event_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_event))
        .route("/", get(show_event_list))
        .route("/:event_id/cancel", post(cancel_event))
        .route("/:event_id/complete", post(complete_event));

    Router::new().nest("/events", routers)
}
