use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    accept_booking, complete_booking, confirm_payment, decline_booking, pay_provider,
    register_booking, show_booking_list,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_booking))
        .route("/", get(show_booking_list))
        .route("/:booking_id/accept", post(accept_booking))
        .route("/:booking_id/decline", post(decline_booking))
        .route("/:booking_id/confirm-payment", post(confirm_payment))
        .route("/:booking_id/complete", post(complete_booking))
        .route("/:booking_id/payout", post(pay_provider));

    Router::new().nest("/bookings", routers)
}
