use derive_new::new;

use crate::model::id::{EventId, UserId};

#[derive(new)]
pub struct CreateEvent {
    pub title: String,
    pub date: String,
    pub location: String,
    pub client_id: UserId,
}

/// Cancels the event: every associated booking is force-set to
/// `cancelled` and the event row is removed, in one transaction.
#[derive(new)]
pub struct CancelEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
}

/// Marks the event finished: confirmed bookings whose payment has been
/// recorded become `completed`; unpaid ones are left untouched.
#[derive(new)]
pub struct CompleteEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
}
