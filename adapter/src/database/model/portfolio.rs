use chrono::{DateTime, Utc};
use kernel::model::{
    id::{PortfolioId, PortfolioImageId, UserId},
    portfolio::{Portfolio, PortfolioImage},
};

#[derive(sqlx::FromRow)]
pub struct PortfolioRow {
    pub portfolio_id: PortfolioId,
    pub provider_id: UserId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl PortfolioRow {
    // Images come from a separate query; a From impl cannot carry them.
    pub fn into_portfolio(self, images: Vec<PortfolioImage>) -> Portfolio {
        let PortfolioRow {
            portfolio_id,
            provider_id,
            title,
            description,
            created_at,
        } = self;
        Portfolio {
            portfolio_id,
            provider_id,
            title,
            description,
            created_at,
            images,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct PortfolioImageRow {
    pub image_id: PortfolioImageId,
    pub portfolio_id: PortfolioId,
    pub file_name: String,
    pub position: i32,
}

impl From<PortfolioImageRow> for PortfolioImage {
    fn from(value: PortfolioImageRow) -> Self {
        let PortfolioImageRow {
            image_id,
            portfolio_id: _,
            file_name,
            position,
        } = value;
        PortfolioImage {
            image_id,
            file_name,
            position,
        }
    }
}
