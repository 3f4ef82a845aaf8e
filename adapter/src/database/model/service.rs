use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ServiceId, UserId},
    service::Service,
};

#[derive(sqlx::FromRow)]
pub struct ServiceRow {
    pub service_id: ServiceId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub provider_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceRow> for Service {
    fn from(value: ServiceRow) -> Self {
        let ServiceRow {
            service_id,
            title,
            category,
            description,
            provider_id,
            created_at,
        } = value;
        Service {
            service_id,
            title,
            category,
            description,
            provider_id,
            created_at,
        }
    }
}
