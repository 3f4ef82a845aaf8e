use chrono::{DateTime, Utc};

use crate::model::id::{ServiceId, UserId};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub service_id: ServiceId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub provider_id: UserId,
    pub created_at: DateTime<Utc>,
}
