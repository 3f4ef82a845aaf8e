use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::PortfolioId,
    portfolio::event::{CreatePortfolio, DeletePortfolio},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::portfolio::{CreatePortfolioRequest, PortfolioListQuery, PortfoliosResponse},
};

pub async fn register_portfolio(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePortfolioRequest>,
) -> AppResult<StatusCode> {
    if !user.is_provider() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate()?;

    let CreatePortfolioRequest {
        title,
        description,
        images,
    } = req;

    // File names are derived here so a re-upload never collides with an
    // earlier portfolio of the same provider.
    let stamp = Utc::now().timestamp();
    let mut file_names = Vec::with_capacity(images.len());
    for (idx, image) in images.iter().enumerate() {
        let ext = image.extension()?;
        let bytes = image.decode()?;
        let file_name = format!("{}_{stamp}_{idx}.{ext}", user.id());
        registry.image_storage().save(&file_name, &bytes).await?;
        file_names.push(file_name);
    }

    registry
        .portfolio_repository()
        .create(CreatePortfolio::new(
            user.id(),
            title,
            description,
            file_names,
        ))
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_portfolio_list(
    _user: AuthorizedUser,
    Query(query): Query<PortfolioListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PortfoliosResponse>> {
    registry
        .portfolio_repository()
        .find_all(query.provider_id)
        .await
        .map(PortfoliosResponse::from)
        .map(Json)
}

pub async fn delete_portfolio(
    user: AuthorizedUser,
    Path(portfolio_id): Path<PortfolioId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_provider() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .portfolio_repository()
        .delete(DeletePortfolio::new(portfolio_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
