use derive_new::new;

use crate::model::id::{PortfolioId, UserId};

#[derive(new)]
pub struct CreatePortfolio {
    pub provider_id: UserId,
    pub title: String,
    pub description: String,
    /// Stored file names, in display order.
    pub image_file_names: Vec<String>,
}

#[derive(new)]
pub struct DeletePortfolio {
    pub portfolio_id: PortfolioId,
    pub requested_user: UserId,
}
