use kernel::model::{
    event::Event,
    id::{EventId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub title: String,
    pub date: String,
    pub location: String,
    pub client_id: UserId,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            title,
            date,
            location,
            client_id,
        } = value;
        Event {
            event_id,
            title,
            date,
            location,
            client_id,
        }
    }
}
