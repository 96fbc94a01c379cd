//! Handlers for user and friendship endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::UserRequest;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.user_service.find_all().await?))
}

/// Registers a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "neo@matrix.io",
///   "login": "neo",
///   "name": "Thomas Anderson",
///   "birthday": "1964-09-02"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or a field rule is broken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state.user_service.create(payload.into_new_user()).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replaces a user's fields. Friends are kept.
///
/// # Endpoint
///
/// `PUT /users`
///
/// # Errors
///
/// Returns 400 if `id` is missing or a field rule is broken.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state.user_service.update(payload.into_update()?).await?;

    Ok(Json(user))
}

/// Makes two users friends.
///
/// # Endpoint
///
/// `PUT /users/{id}/friends/{friendId}`
///
/// Responds with the full user list.
pub async fn add_friend_handler(
    path: Result<Path<(i64, i64)>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let Path((id, friend_id)) = path?;
    Ok(Json(state.user_service.add_friend(id, friend_id).await?))
}

/// Ends a friendship.
///
/// # Endpoint
///
/// `DELETE /users/{id}/friends/{friendId}`
///
/// Responds with the full user list.
pub async fn remove_friend_handler(
    path: Result<Path<(i64, i64)>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let Path((id, friend_id)) = path?;
    Ok(Json(state.user_service.remove_friend(id, friend_id).await?))
}

/// Lists a user's friends.
///
/// # Endpoint
///
/// `GET /users/{id}/friends`
pub async fn friends_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let Path(id) = path?;
    Ok(Json(state.user_service.find_friends(id).await?))
}

/// Lists friends shared by two users.
///
/// # Endpoint
///
/// `GET /users/{id}/friends/common/{otherId}`
pub async fn common_friends_handler(
    path: Result<Path<(i64, i64)>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let Path((id, other_id)) = path?;
    Ok(Json(
        state.user_service.find_common_friends(id, other_id).await?,
    ))
}
