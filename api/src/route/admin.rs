use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::admin::show_stats;

pub fn build_admin_routers() -> Router<AppRegistry> {
    let routers = Router::new().route("/stats", get(show_stats));

    Router::new().nest("/admin", routers)
}
