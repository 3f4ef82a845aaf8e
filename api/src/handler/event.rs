use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    event::event::{CancelEvent, CompleteEvent, CreateEvent},
    id::EventId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::event::{CreateEventRequest, EventsResponse},
};

pub async fn register_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEventRequest>,
) -> AppResult<StatusCode> {
    if !user.is_client() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate()?;

    let CreateEventRequest {
        title,
        date,
        location,
    } = req;
    registry
        .event_repository()
        .create(CreateEvent::new(title, date, location, user.id()))
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_event_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    if !user.is_client() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .event_repository()
        .find_by_client(user.id())
        .await
        .map(EventsResponse::from)
        .map(Json)
}

pub async fn cancel_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_client() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .event_repository()
        .cancel(CancelEvent::new(event_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn complete_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_client() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .event_repository()
        .complete(CompleteEvent::new(event_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}
