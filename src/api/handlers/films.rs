//! Handlers for film endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::film::FilmRequest;
use crate::api::dto::popular::PopularParams;
use crate::domain::entities::Film;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all films.
///
/// # Endpoint
///
/// `GET /films`
pub async fn film_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Film>>, AppError> {
    let films = state.film_service.find_all().await?;
    tracing::debug!(count = films.len(), "Listing films");
    Ok(Json(films))
}

/// Adds a film to the catalogue.
///
/// # Endpoint
///
/// `POST /films`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Matrix",
///   "description": "A hacker learns the truth",
///   "releaseDate": "1999-03-31",
///   "duration": 136
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or a field rule is broken.
/// Returns 404 if `userLikes` references an unknown user.
pub async fn create_film_handler(
    State(state): State<AppState>,
    payload: Result<Json<FilmRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Film>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let film = state.film_service.create(payload.into_new_film()).await?;

    Ok((StatusCode::CREATED, Json(film)))
}

/// Replaces a film's fields. Likes are kept.
///
/// # Endpoint
///
/// `PUT /films`
///
/// # Errors
///
/// Returns 400 if `id` is missing or a field rule is broken.
/// Returns 404 if the film does not exist.
pub async fn update_film_handler(
    State(state): State<AppState>,
    payload: Result<Json<FilmRequest>, JsonRejection>,
) -> Result<Json<Film>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let film = state.film_service.update(payload.into_update()?).await?;

    Ok(Json(film))
}

/// Records a like from a user.
///
/// # Endpoint
///
/// `PUT /films/{id}/like/{userId}`
///
/// # Errors
///
/// Returns 400 if an id is not a number.
/// Returns 404 if the film or the user does not exist.
pub async fn add_like_handler(
    path: Result<Path<(i64, i64)>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Film>, AppError> {
    let Path((id, user_id)) = path?;
    let film = state.film_service.add_like(id, user_id).await?;
    Ok(Json(film))
}

/// Withdraws a like.
///
/// # Endpoint
///
/// `DELETE /films/{id}/like/{userId}`
///
/// # Errors
///
/// Returns 404 if the film or the user does not exist.
pub async fn remove_like_handler(
    path: Result<Path<(i64, i64)>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Film>, AppError> {
    let Path((id, user_id)) = path?;
    let film = state.film_service.remove_like(id, user_id).await?;
    Ok(Json(film))
}

/// Returns the most liked films.
///
/// # Endpoint
///
/// `GET /films/popular?count=N`
///
/// `count` defaults to the configured value (10 unless overridden), also when
/// sent empty, and is clamped to the number of films.
///
/// # Errors
///
/// Returns 400 if `count` is negative or not a number.
pub async fn popular_films_handler(
    State(state): State<AppState>,
    params: Result<Query<PopularParams>, QueryRejection>,
) -> Result<Json<Vec<Film>>, AppError> {
    let Query(params) = params?;

    let count = params
        .resolve_count(state.popular_default_count)
        .map_err(|e| {
            tracing::warn!(count = ?params.count, "Rejected popular films count");
            AppError::bad_request(e, json!({ "count": params.count }))
        })?;

    let films = state.film_service.get_popular(count).await?;
    Ok(Json(films))
}
