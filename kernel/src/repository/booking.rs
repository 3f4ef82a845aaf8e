use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{
            AcceptBooking, CompleteBooking, ConfirmPayment, CreateBooking, DeclineBooking,
            PayProvider,
        },
        Booking,
    },
    id::{BookingId, UserId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Creates a pending booking. At most one booking may exist per
    /// (event, provider) pair, enforced by the storage layer.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_by_provider(&self, provider_id: UserId) -> AppResult<Vec<Booking>>;
    /// Bookings attached to any of the client's events.
    async fn find_by_client(&self, client_id: UserId) -> AppResult<Vec<Booking>>;
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    /// pending → confirmed, by the targeted provider only.
    async fn accept(&self, event: AcceptBooking) -> AppResult<()>;
    /// pending → cancelled, by the targeted provider only.
    async fn decline(&self, event: DeclineBooking) -> AppResult<()>;
    /// Records the client payment; the amount must be positive.
    async fn confirm_payment(&self, event: ConfirmPayment) -> AppResult<()>;
    /// confirmed → completed; rejected while the payment is outstanding.
    async fn complete(&self, event: CompleteBooking) -> AppResult<()>;
    /// Computes and records the provider's share; rejected while the
    /// payment is outstanding or when the payout already ran.
    async fn pay_provider(&self, event: PayProvider) -> AppResult<Decimal>;
    async fn count_confirmed_by_provider(&self, provider_id: UserId) -> AppResult<i64>;
    /// Whether the client holds a confirmed booking with the provider on
    /// any of their own events. Gates the contact-details endpoint.
    async fn client_has_confirmed_booking(
        &self,
        client_id: UserId,
        provider_id: UserId,
    ) -> AppResult<bool>;
}
