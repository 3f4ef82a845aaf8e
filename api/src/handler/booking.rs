use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::event::{
        AcceptBooking, CompleteBooking, ConfirmPayment, CreateBooking, DeclineBooking, PayProvider,
    },
    id::BookingId,
    role::Role,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingsResponse, ConfirmPaymentRequest, CreateBookingRequest, PayoutResponse,
    },
};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<StatusCode> {
    if !user.is_client() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate()?;

    let CreateBookingRequest {
        event_id,
        provider_id,
    } = req;
    registry
        .booking_repository()
        .create(CreateBooking::new(event_id, provider_id, user.id()))
        .await
        .map(|_| StatusCode::CREATED)
}

/// Providers see bookings addressed to them, clients the bookings on
/// their events, admins everything.
pub async fn show_booking_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let repo = registry.booking_repository();
    let bookings = match user.user.role {
        Role::Provider => repo.find_by_provider(user.id()).await?,
        Role::Client => repo.find_by_client(user.id()).await?,
        Role::Admin => repo.find_all().await?,
    };
    Ok(Json(BookingsResponse::from(bookings)))
}

pub async fn accept_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_provider() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .booking_repository()
        .accept(AcceptBooking::new(booking_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn decline_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_provider() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .booking_repository()
        .decline(DeclineBooking::new(booking_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn confirm_payment(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ConfirmPaymentRequest>,
) -> AppResult<StatusCode> {
    if !user.is_provider() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate()?;

    registry
        .booking_repository()
        .confirm_payment(ConfirmPayment::new(booking_id, user.id(), req.amount))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn complete_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_provider() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .booking_repository()
        .complete(CompleteBooking::new(booking_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn pay_provider(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PayoutResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let provider_payment = registry
        .booking_repository()
        .pay_provider(PayProvider::new(booking_id))
        .await?;
    Ok(Json(PayoutResponse {
        booking_id,
        provider_payment,
    }))
}
