use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::service::event::CreateService;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::service::{CreateServiceRequest, ServiceListQuery, ServicesResponse},
};

pub async fn register_service(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateServiceRequest>,
) -> AppResult<StatusCode> {
    if !user.is_provider() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate()?;

    let CreateServiceRequest {
        title,
        category,
        description,
    } = req;
    registry
        .service_repository()
        .create(CreateService::new(title, category, description, user.id()))
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_service_list(
    _user: AuthorizedUser,
    Query(query): Query<ServiceListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ServicesResponse>> {
    registry
        .service_repository()
        .find_all(query.provider_id)
        .await
        .map(ServicesResponse::from)
        .map(Json)
}
