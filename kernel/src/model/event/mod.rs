use crate::model::id::{EventId, UserId};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: EventId,
    pub title: String,
    // Kept as free text on purpose; the date field was never validated.
    pub date: String,
    pub location: String,
    pub client_id: UserId,
}
