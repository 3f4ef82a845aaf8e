use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use strum::{Display, EnumString};

use crate::model::id::{BookingId, EventId, UserId};

pub mod event;

/// A provider stops being offered to clients once they hold this many
/// confirmed bookings. Recomputed on every read, never stored.
pub const MAX_CONFIRMED_BOOKINGS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Legal transitions of the booking lifecycle. The confirmed→cancelled
    /// edge only happens through event cancellation; `completed` and
    /// `cancelled` are terminal.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub provider_id: UserId,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub provider_payment_status: PaymentStatus,
    pub payment_amount: Option<Decimal>,
    pub provider_payment: Option<Decimal>,
    pub platform_fee_percentage: i32,
    pub created_at: DateTime<Utc>,
    // None once the parent event has been cancelled and deleted.
    pub event: Option<BookingEvent>,
}

#[derive(Debug)]
pub struct BookingEvent {
    pub event_id: EventId,
    pub title: String,
    pub date: String,
    pub location: String,
    pub client_id: UserId,
}

/// Share of a paid amount forwarded to the provider after the platform
/// retains its fee.
pub fn provider_payout(payment_amount: Decimal, platform_fee_percentage: i32) -> Decimal {
    payment_amount * Decimal::from(100 - platform_fee_percentage) / Decimal::from(100)
}

pub fn is_available(confirmed_count: i64) -> bool {
    confirmed_count < MAX_CONFIRMED_BOOKINGS
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn pending_can_be_confirmed_or_cancelled() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    }

    #[test]
    fn confirmed_can_be_completed_or_cancelled() {
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn terminal_states_have_no_outgoing_transitions() {
        for next in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert!(!BookingStatus::Cancelled.can_transition_to(next));
            assert!(!BookingStatus::Completed.can_transition_to(next));
        }
    }

    #[test]
    fn payout_applies_default_platform_fee() {
        let payout = provider_payout(Decimal::from(5000), 20);
        assert_eq!(payout, Decimal::from(4000));
    }

    #[test]
    fn payout_keeps_fractional_amounts_exact() {
        let payout = provider_payout(Decimal::from(999), 20);
        assert_eq!(payout, Decimal::new(7992, 1)); // 799.2
    }

    #[test]
    fn payout_with_zero_fee_returns_full_amount() {
        let amount = Decimal::new(123_45, 2);
        assert_eq!(provider_payout(amount, 0), amount);
    }

    #[test]
    fn availability_flips_exactly_at_three_confirmed_bookings() {
        assert!(is_available(0));
        assert!(is_available(2));
        assert!(!is_available(3));
        assert!(!is_available(4));
    }
}
