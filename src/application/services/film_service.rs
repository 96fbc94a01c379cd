//! Film catalogue service.

use std::sync::Arc;

use crate::domain::entities::{Film, FilmUpdate, NewFilm};
use crate::domain::repositories::{FilmRepository, UserRepository};
use crate::error::AppError;

/// Service for films, likes and the popularity ranking.
///
/// Film storage only knows about films, so this service confirms that every
/// user id it is about to record as a like belongs to an existing user.
pub struct FilmService<F: FilmRepository, U: UserRepository> {
    film_repository: Arc<F>,
    user_repository: Arc<U>,
}

impl<F: FilmRepository, U: UserRepository> FilmService<F, U> {
    /// Creates a new film service.
    pub fn new(film_repository: Arc<F>, user_repository: Arc<U>) -> Self {
        Self {
            film_repository,
            user_repository,
        }
    }

    /// Lists every film.
    pub async fn find_all(&self) -> Result<Vec<Film>, AppError> {
        self.film_repository.find_all().await
    }

    /// Adds a film to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if an initial like references an unknown user.
    pub async fn create(&self, new_film: NewFilm) -> Result<Film, AppError> {
        for &user_id in &new_film.user_likes {
            self.ensure_user_exists(user_id).await?;
        }

        let film = self.film_repository.create(new_film).await?;
        tracing::info!(film_id = film.id, name = %film.name, "Film created");
        Ok(film)
    }

    /// Replaces a film's name, description, release date and duration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the film does not exist.
    pub async fn update(&self, update: FilmUpdate) -> Result<Film, AppError> {
        let film = self.film_repository.update(update).await?;
        tracing::info!(film_id = film.id, "Film updated");
        Ok(film)
    }

    /// Records that a user likes a film.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the film or the user does not exist.
    pub async fn add_like(&self, film_id: i64, user_id: i64) -> Result<Film, AppError> {
        self.ensure_film_exists(film_id).await?;
        self.ensure_user_exists(user_id).await?;

        let film = self.film_repository.add_like(film_id, user_id).await?;
        tracing::info!(film_id, user_id, likes = film.like_count(), "Like added");
        Ok(film)
    }

    /// Withdraws a user's like. Missing likes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the film or the user does not exist.
    pub async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<Film, AppError> {
        self.ensure_film_exists(film_id).await?;
        self.ensure_user_exists(user_id).await?;

        let film = self.film_repository.remove_like(film_id, user_id).await?;
        tracing::info!(film_id, user_id, likes = film.like_count(), "Like removed");
        Ok(film)
    }

    /// Returns up to `count` films ordered by descending like count.
    pub async fn get_popular(&self, count: usize) -> Result<Vec<Film>, AppError> {
        self.film_repository.get_popular(count).await
    }

    /// Number of films in the catalogue.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.film_repository.count().await
    }

    async fn ensure_film_exists(&self, film_id: i64) -> Result<(), AppError> {
        match self.film_repository.find_by_id(film_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::film_not_found(film_id)),
        }
    }

    async fn ensure_user_exists(&self, user_id: i64) -> Result<(), AppError> {
        if self.user_repository.exists(user_id).await? {
            Ok(())
        } else {
            Err(AppError::user_not_found(user_id))
        }
    }
}
