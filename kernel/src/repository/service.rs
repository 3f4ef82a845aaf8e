use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{ServiceId, UserId},
    service::{event::CreateService, Service},
};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, event: CreateService) -> AppResult<ServiceId>;
    async fn find_all(&self, provider_id: Option<UserId>) -> AppResult<Vec<Service>>;
}
