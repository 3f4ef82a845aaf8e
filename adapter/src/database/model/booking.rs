use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{Booking, BookingEvent, BookingStatus, PaymentStatus},
    id::{BookingId, EventId, UserId},
};
use rust_decimal::Decimal;
use shared::error::AppError;

fn parse_booking_status(text: &str) -> Result<BookingStatus, AppError> {
    text.parse()
        .map_err(|_| AppError::ConversionEntityError(format!("unknown booking status: {text}")))
}

fn parse_payment_status(text: &str) -> Result<PaymentStatus, AppError> {
    text.parse()
        .map_err(|_| AppError::ConversionEntityError(format!("unknown payment status: {text}")))
}

/// Full booking row, LEFT JOINed with its event. The event columns are
/// NULL once the event has been cancelled and deleted.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub provider_id: UserId,
    pub status: String,
    pub payment_status: String,
    pub provider_payment_status: String,
    pub payment_amount: Option<Decimal>,
    pub provider_payment: Option<Decimal>,
    pub platform_fee_percentage: i32,
    pub created_at: DateTime<Utc>,
    pub event_id: Option<EventId>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub client_id: Option<UserId>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            provider_id,
            status,
            payment_status,
            provider_payment_status,
            payment_amount,
            provider_payment,
            platform_fee_percentage,
            created_at,
            event_id,
            title,
            date,
            location,
            client_id,
        } = value;
        let event = match (event_id, title, date, location, client_id) {
            (Some(event_id), Some(title), Some(date), Some(location), Some(client_id)) => {
                Some(BookingEvent {
                    event_id,
                    title,
                    date,
                    location,
                    client_id,
                })
            }
            _ => None,
        };
        Ok(Booking {
            booking_id,
            provider_id,
            status: parse_booking_status(&status)?,
            payment_status: parse_payment_status(&payment_status)?,
            provider_payment_status: parse_payment_status(&provider_payment_status)?,
            payment_amount,
            provider_payment,
            platform_fee_percentage,
            created_at,
            event,
        })
    }
}

/// Narrow row used by the guarded transitions; fetched FOR UPDATE so the
/// guard and the write happen against the same state.
#[derive(sqlx::FromRow)]
pub struct BookingStateRow {
    pub booking_id: BookingId,
    pub provider_id: UserId,
    pub status: String,
    pub payment_status: String,
    pub provider_payment_status: String,
    pub payment_amount: Option<Decimal>,
    pub platform_fee_percentage: i32,
}

impl BookingStateRow {
    pub fn status(&self) -> Result<BookingStatus, AppError> {
        parse_booking_status(&self.status)
    }

    pub fn payment_status(&self) -> Result<PaymentStatus, AppError> {
        parse_payment_status(&self.payment_status)
    }

    pub fn provider_payment_status(&self) -> Result<PaymentStatus, AppError> {
        parse_payment_status(&self.provider_payment_status)
    }
}
