use derive_new::new;
use rust_decimal::Decimal;

use crate::model::id::{BookingId, EventId, UserId};

#[derive(new)]
pub struct CreateBooking {
    pub event_id: EventId,
    pub provider_id: UserId,
    pub requested_client: UserId,
}

#[derive(new)]
pub struct AcceptBooking {
    pub booking_id: BookingId,
    pub provider_id: UserId,
}

#[derive(new)]
pub struct DeclineBooking {
    pub booking_id: BookingId,
    pub provider_id: UserId,
}

#[derive(new)]
pub struct ConfirmPayment {
    pub booking_id: BookingId,
    pub provider_id: UserId,
    pub payment_amount: Decimal,
}

#[derive(new)]
pub struct CompleteBooking {
    pub booking_id: BookingId,
    pub provider_id: UserId,
}

/// Admin-initiated payout of the provider's share.
#[derive(new)]
pub struct PayProvider {
    pub booking_id: BookingId,
}
