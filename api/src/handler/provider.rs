use axum::{
    extract::{Path, Query, State},
    Json,
};
use kernel::model::{id::UserId, role::Role};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::user::{ProviderContactResponse, ProviderSearchQuery, ProvidersResponse},
};

pub async fn show_provider_list(
    user: AuthorizedUser,
    Query(query): Query<ProviderSearchQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProvidersResponse>> {
    if !user.is_client() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .user_repository()
        .find_providers(query.into())
        .await
        .map(ProvidersResponse::from)
        .map(Json)
}

/// Contact details are released only to a client who already holds a
/// confirmed booking with this provider on one of their own events.
pub async fn show_provider_contact(
    user: AuthorizedUser,
    Path(provider_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProviderContactResponse>> {
    if !user.is_client() {
        return Err(AppError::ForbiddenOperation);
    }

    let provider = registry
        .user_repository()
        .find_by_id(provider_id)
        .await?
        .filter(|u| matches!(u.role, Role::Provider))
        .ok_or(AppError::EntityNotFound("provider not found".into()))?;

    let confirmed = registry
        .booking_repository()
        .client_has_confirmed_booking(user.id(), provider_id)
        .await?;
    if !confirmed {
        return Err(AppError::ForbiddenOperation);
    }

    Ok(Json(ProviderContactResponse::from(provider)))
}
