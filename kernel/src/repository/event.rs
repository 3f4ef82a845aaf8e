use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    event::{
        event::{CancelEvent, CompleteEvent, CreateEvent},
        Event,
    },
    id::{EventId, UserId},
};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    async fn find_by_client(&self, client_id: UserId) -> AppResult<Vec<Event>>;
    /// Cancels every associated booking and deletes the event row in a
    /// single transaction.
    async fn cancel(&self, event: CancelEvent) -> AppResult<()>;
    /// Completes every paid, confirmed booking of the event.
    async fn complete(&self, event: CompleteEvent) -> AppResult<()>;
}
