use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{extractor::AuthorizedUser, model::stats::StatsResponse};

pub async fn show_stats(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .stats_repository()
        .collect()
        .await
        .map(StatsResponse::from)
        .map(Json)
}
