use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{PortfolioId, UserId},
    portfolio::{
        event::{CreatePortfolio, DeletePortfolio},
        Portfolio,
    },
};

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn create(&self, event: CreatePortfolio) -> AppResult<PortfolioId>;
    async fn find_all(&self, provider_id: Option<UserId>) -> AppResult<Vec<Portfolio>>;
    /// Owner-only; images are removed with the parent row.
    async fn delete(&self, event: DeletePortfolio) -> AppResult<()>;
}
