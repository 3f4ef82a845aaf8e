use chrono::{DateTime, Utc};

use crate::model::id::{PortfolioId, PortfolioImageId, UserId};

pub mod event;

/// A portfolio item holds at most this many images.
pub const MAX_PORTFOLIO_IMAGES: usize = 3;

#[derive(Debug)]
pub struct Portfolio {
    pub portfolio_id: PortfolioId,
    pub provider_id: UserId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub images: Vec<PortfolioImage>,
}

#[derive(Debug)]
pub struct PortfolioImage {
    pub image_id: PortfolioImageId,
    pub file_name: String,
    pub position: i32,
}
