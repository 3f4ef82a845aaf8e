use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingEvent, BookingStatus, PaymentStatus},
    id::{BookingId, EventId, UserId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusName {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Cancelled => Self::Cancelled,
            BookingStatus::Completed => Self::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusName {
    Pending,
    Paid,
}

impl From<PaymentStatus> for PaymentStatusName {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Paid,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub event_id: EventId,
    #[garde(skip)]
    pub provider_id: UserId,
}

/// The amount itself is range-checked in the repository (must be
/// positive), so the request side only requires it to be present.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    #[garde(skip)]
    pub amount: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub provider_id: UserId,
    pub status: BookingStatusName,
    pub payment_status: PaymentStatusName,
    pub provider_payment_status: PaymentStatusName,
    pub payment_amount: Option<Decimal>,
    pub provider_payment: Option<Decimal>,
    pub platform_fee_percentage: i32,
    pub created_at: DateTime<Utc>,
    pub event: Option<BookingEventResponse>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            provider_id,
            status,
            payment_status,
            provider_payment_status,
            payment_amount,
            provider_payment,
            platform_fee_percentage,
            created_at,
            event,
        } = value;
        Self {
            booking_id,
            provider_id,
            status: status.into(),
            payment_status: payment_status.into(),
            provider_payment_status: provider_payment_status.into(),
            payment_amount,
            provider_payment,
            platform_fee_percentage,
            created_at,
            event: event.map(BookingEventResponse::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEventResponse {
    pub event_id: EventId,
    pub title: String,
    pub date: String,
    pub location: String,
    pub client_id: UserId,
}

impl From<BookingEvent> for BookingEventResponse {
    fn from(value: BookingEvent) -> Self {
        let BookingEvent {
            event_id,
            title,
            date,
            location,
            client_id,
        } = value;
        Self {
            event_id,
            title,
            date,
            location,
            client_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutResponse {
    pub booking_id: BookingId,
    pub provider_payment: Decimal,
}
