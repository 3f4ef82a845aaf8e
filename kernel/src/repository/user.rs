use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{
        event::{CreateClient, CreateProvider, ProviderSearch, UpdateProfilePicture},
        ProviderSummary, User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_client(&self, event: CreateClient) -> AppResult<UserId>;
    async fn create_provider(&self, event: CreateProvider) -> AppResult<UserId>;
    /// Creates the admin account when it does not exist yet; called once
    /// at startup.
    async fn ensure_admin(&self, email: &str, password: &str) -> AppResult<()>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn delete(&self, user_id: UserId) -> AppResult<()>;
    /// Providers matching the filters, each with its availability flag.
    async fn find_providers(&self, query: ProviderSearch) -> AppResult<Vec<ProviderSummary>>;
    async fn update_profile_picture(&self, event: UpdateProfilePicture) -> AppResult<()>;
}
