use async_trait::async_trait;
use derive_new::new;
use kernel::model::stats::MarketplaceStats;
use kernel::repository::stats::StatsRepository;
use shared::error::{AppError, AppResult};

use crate::database::ConnectionPool;

#[derive(new)]
pub struct StatsRepositoryImpl {
    db: ConnectionPool,
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total_users: i64,
    total_events: i64,
    total_providers: i64,
    total_bookings: i64,
}

#[async_trait]
impl StatsRepository for StatsRepositoryImpl {
    async fn collect(&self) -> AppResult<MarketplaceStats> {
        let row: StatsRow = sqlx::query_as(
            r#"
                SELECT
                    (SELECT COUNT(*) FROM users) AS total_users,
                    (SELECT COUNT(*) FROM events) AS total_events,
                    (SELECT COUNT(*) FROM users WHERE role = 'provider')
                        AS total_providers,
                    (SELECT COUNT(*) FROM bookings) AS total_bookings
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(MarketplaceStats {
            total_users: row.total_users,
            total_events: row.total_events,
            total_providers: row.total_providers,
            total_bookings: row.total_bookings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures("common"))]
    async fn counters_reflect_the_seeded_rows(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = StatsRepositoryImpl::new(ConnectionPool::new(pool));

        let stats = repo.collect().await?;
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.total_providers, 2);
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.total_bookings, 0);
        Ok(())
    }
}
