//! Repository trait for film data access.

use crate::domain::entities::{Film, FilmUpdate, NewFilm};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the film catalogue.
///
/// Owns film identity: ids are allocated here and never reused. User ids
/// passed to the like operations are stored as given; callers confirm the
/// user exists first (see [`crate::application::services::FilmService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryFilmRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_film.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Returns every film ordered by id.
    async fn find_all(&self) -> Result<Vec<Film>, AppError>;

    /// Finds a film by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Film>, AppError>;

    /// Stores a new film under the next free id.
    async fn create(&self, new_film: NewFilm) -> Result<Film, AppError>;

    /// Replaces the scalar fields of an existing film.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no film has `update.id`.
    async fn update(&self, update: FilmUpdate) -> Result<Film, AppError>;

    /// Records a like. Liking twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the film does not exist.
    async fn add_like(&self, film_id: i64, user_id: i64) -> Result<Film, AppError>;

    /// Removes a like if present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the film does not exist.
    async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<Film, AppError>;

    /// Returns at most `count` films, most liked first.
    ///
    /// Films with equal like counts are ordered by ascending id.
    async fn get_popular(&self, count: usize) -> Result<Vec<Film>, AppError>;

    /// Number of stored films.
    async fn count(&self) -> Result<usize, AppError>;
}
