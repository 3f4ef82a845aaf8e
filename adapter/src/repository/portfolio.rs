use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{PortfolioId, PortfolioImageId, UserId},
    portfolio::{
        event::{CreatePortfolio, DeletePortfolio},
        Portfolio, PortfolioImage, MAX_PORTFOLIO_IMAGES,
    },
};
use kernel::repository::portfolio::PortfolioRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::portfolio::{PortfolioImageRow, PortfolioRow},
    ConnectionPool,
};

#[derive(new)]
pub struct PortfolioRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryImpl {
    async fn create(&self, event: CreatePortfolio) -> AppResult<PortfolioId> {
        if event.image_file_names.len() > MAX_PORTFOLIO_IMAGES {
            return Err(AppError::UnprocessableEntity(format!(
                "a portfolio item holds at most {MAX_PORTFOLIO_IMAGES} images"
            )));
        }

        let mut tx = self.db.begin().await?;

        let portfolio_id = PortfolioId::new();
        sqlx::query(
            r#"
                INSERT INTO portfolios (portfolio_id, provider_id, title, description)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(portfolio_id)
        .bind(event.provider_id)
        .bind(&event.title)
        .bind(&event.description)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        for (position, file_name) in event.image_file_names.iter().enumerate() {
            sqlx::query(
                r#"
                    INSERT INTO portfolio_images (image_id, portfolio_id, file_name, position)
                    VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(PortfolioImageId::new())
            .bind(portfolio_id)
            .bind(file_name)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(portfolio_id)
    }

    async fn find_all(&self, provider_id: Option<UserId>) -> AppResult<Vec<Portfolio>> {
        let rows: Vec<PortfolioRow> = sqlx::query_as(
            r#"
                SELECT portfolio_id, provider_id, title, description, created_at
                FROM portfolios
                WHERE ($1::uuid IS NULL OR provider_id = $1)
                ORDER BY created_at DESC
            "#,
        )
        .bind(provider_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let image_rows: Vec<PortfolioImageRow> = sqlx::query_as(
            r#"
                SELECT i.image_id, i.portfolio_id, i.file_name, i.position
                FROM portfolio_images AS i
                INNER JOIN portfolios AS p ON i.portfolio_id = p.portfolio_id
                WHERE ($1::uuid IS NULL OR p.provider_id = $1)
                ORDER BY i.position ASC
            "#,
        )
        .bind(provider_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let portfolios = rows
            .into_iter()
            .map(|row| {
                let images = image_rows
                    .iter()
                    .filter(|i| i.portfolio_id == row.portfolio_id)
                    .map(|i| PortfolioImage {
                        image_id: i.image_id,
                        file_name: i.file_name.clone(),
                        position: i.position,
                    })
                    .collect();
                row.into_portfolio(images)
            })
            .collect();

        Ok(portfolios)
    }

    async fn delete(&self, event: DeletePortfolio) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let owner: Option<UserId> = sqlx::query_scalar(
            "SELECT provider_id FROM portfolios WHERE portfolio_id = $1 FOR UPDATE",
        )
        .bind(event.portfolio_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(owner) = owner else {
            return Err(AppError::EntityNotFound(format!(
                "portfolio ({}) not found",
                event.portfolio_id
            )));
        };
        if owner != event.requested_user {
            return Err(AppError::ForbiddenOperation);
        }

        // Images go with the parent through the cascade.
        sqlx::query("DELETE FROM portfolios WHERE portfolio_id = $1")
            .bind(event.portfolio_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)
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
    async fn portfolio_keeps_images_in_order(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PortfolioRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreatePortfolio::new(
            provider_id(),
            "Mariages 2025".into(),
            "Une saison complète".into(),
            vec!["a_1.jpg".into(), "a_2.jpg".into(), "a_3.jpg".into()],
        ))
        .await?;

        let portfolios = repo.find_all(Some(provider_id())).await?;
        assert_eq!(portfolios.len(), 1);
        let file_names: Vec<_> = portfolios[0]
            .images
            .iter()
            .map(|i| i.file_name.as_str())
            .collect();
        assert_eq!(file_names, ["a_1.jpg", "a_2.jpg", "a_3.jpg"]);
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn a_fourth_image_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PortfolioRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .create(CreatePortfolio::new(
                provider_id(),
                "Trop d'images".into(),
                "".into(),
                vec![
                    "a.jpg".into(),
                    "b.jpg".into(),
                    "c.jpg".into(),
                    "d.jpg".into(),
                ],
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(fixtures("common"))]
    async fn only_the_owner_may_delete(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PortfolioRepositoryImpl::new(ConnectionPool::new(pool));

        let portfolio_id = repo
            .create(CreatePortfolio::new(
                provider_id(),
                "Portraits".into(),
                "".into(),
                vec!["p.png".into()],
            ))
            .await?;

        let res = repo
            .delete(DeletePortfolio::new(portfolio_id, other_provider_id()))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        repo.delete(DeletePortfolio::new(portfolio_id, provider_id()))
            .await?;
        assert!(repo.find_all(Some(provider_id())).await?.is_empty());
        Ok(())
    }
}
