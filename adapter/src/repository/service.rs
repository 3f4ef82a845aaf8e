use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ServiceId, UserId},
    service::{event::CreateService, Service},
};
use kernel::repository::service::ServiceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::service::ServiceRow, ConnectionPool};

#[derive(new)]
pub struct ServiceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryImpl {
    async fn create(&self, event: CreateService) -> AppResult<ServiceId> {
        let service_id = ServiceId::new();
        sqlx::query(
            r#"
                INSERT INTO services (service_id, title, category, description, provider_id)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(service_id)
        .bind(&event.title)
        .bind(&event.category)
        .bind(&event.description)
        .bind(event.provider_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(service_id)
    }

    async fn find_all(&self, provider_id: Option<UserId>) -> AppResult<Vec<Service>> {
        let rows: Vec<ServiceRow> = sqlx::query_as(
            r#"
                SELECT service_id, title, category, description, provider_id, created_at
                FROM services
                WHERE ($1::uuid IS NULL OR provider_id = $1)
                ORDER BY created_at DESC
            "#,
        )
        .bind(provider_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Service::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn provider_id() -> UserId {
        UserId::from_str("22222222-2222-2222-2222-222222222222").unwrap()
    }

    fn other_provider_id() -> UserId {
        UserId::from_str("33333333-3333-3333-3333-333333333333").unwrap()
    }

    #[sqlx::test(fixtures("common"))]
    async fn services_can_be_filtered_by_provider(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ServiceRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateService::new(
            "Traiteur mariage".into(),
            "catering".into(),
            "Menu complet".into(),
            provider_id(),
        ))
        .await?;
        repo.create(CreateService::new(
            "Photographe".into(),
            "photography".into(),
            "Reportage photo".into(),
            other_provider_id(),
        ))
        .await?;

        let all = repo.find_all(None).await?;
        assert_eq!(all.len(), 2);

        let only_one = repo.find_all(Some(provider_id())).await?;
        assert_eq!(only_one.len(), 1);
        assert_eq!(only_one[0].title, "Traiteur mariage");
        Ok(())
    }
}
