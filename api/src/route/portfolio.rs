use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::portfolio::{delete_portfolio, register_portfolio, show_portfolio_list};

pub fn build_portfolio_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_portfolio))
        .route("/", get(show_portfolio_list))
        .route("/:portfolio_id", delete(delete_portfolio));

    Router::new().nest("/portfolios", routers)
}
