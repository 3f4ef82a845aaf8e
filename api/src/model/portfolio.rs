use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{PortfolioId, PortfolioImageId, UserId},
    portfolio::{Portfolio, PortfolioImage, MAX_PORTFOLIO_IMAGES},
};
use serde::{Deserialize, Serialize};

use crate::model::upload::ImageUpload;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
    #[garde(length(min = 1, max = MAX_PORTFOLIO_IMAGES))]
    pub images: Vec<ImageUpload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioListQuery {
    pub provider_id: Option<UserId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfoliosResponse {
    pub items: Vec<PortfolioResponse>,
}

impl From<Vec<Portfolio>> for PortfoliosResponse {
    fn from(value: Vec<Portfolio>) -> Self {
        Self {
            items: value.into_iter().map(PortfolioResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub portfolio_id: PortfolioId,
    pub provider_id: UserId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub images: Vec<PortfolioImageResponse>,
}

impl From<Portfolio> for PortfolioResponse {
    fn from(value: Portfolio) -> Self {
        let Portfolio {
            portfolio_id,
            provider_id,
            title,
            description,
            created_at,
            images,
        } = value;
        Self {
            portfolio_id,
            provider_id,
            title,
            description,
            created_at,
            images: images.into_iter().map(PortfolioImageResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioImageResponse {
    pub image_id: PortfolioImageId,
    pub file_name: String,
    pub position: i32,
}

impl From<PortfolioImage> for PortfolioImageResponse {
    fn from(value: PortfolioImage) -> Self {
        let PortfolioImage {
            image_id,
            file_name,
            position,
        } = value;
        Self {
            image_id,
            file_name,
            position,
        }
    }
}
