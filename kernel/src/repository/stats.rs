use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::stats::MarketplaceStats;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn collect(&self) -> AppResult<MarketplaceStats>;
}
