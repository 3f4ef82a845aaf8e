use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::UserId, user::event::UpdateProfilePicture};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        upload::ImageUpload,
        user::{RegisterClientRequest, RegisterProviderRequest, UserResponse},
    },
};

pub async fn register_client(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterClientRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .user_repository()
        .create_client(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn register_provider(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterProviderRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .user_repository()
        .create_provider(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.user))
}

/// Stores the picture as `<user_id>.<ext>`; re-uploading replaces it.
pub async fn update_profile_picture(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<ImageUpload>,
) -> AppResult<StatusCode> {
    let ext = req.extension()?;
    let bytes = req.decode()?;
    let file_name = format!("{}.{}", user.id(), ext);
    registry.image_storage().save(&file_name, &bytes).await?;

    registry
        .user_repository()
        .update_profile_picture(UpdateProfilePicture::new(user.id(), file_name))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .user_repository()
        .delete(user_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
