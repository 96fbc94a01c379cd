use std::sync::Arc;

use crate::application::services::{FilmService, UserService};
use crate::infrastructure::persistence::{InMemoryFilmRepository, InMemoryUserRepository};

pub type AppFilmService = FilmService<InMemoryFilmRepository, InMemoryUserRepository>;
pub type AppUserService = UserService<InMemoryUserRepository>;

/// Shared handler state. Cloning is cheap; services are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub film_service: Arc<AppFilmService>,
    pub user_service: Arc<AppUserService>,
    /// Used by `GET /films/popular` when no `count` is given.
    pub popular_default_count: usize,
}

impl AppState {
    /// Wires services on top of fresh, empty repositories.
    pub fn new(popular_default_count: usize) -> Self {
        let film_repository = Arc::new(InMemoryFilmRepository::new());
        let user_repository = Arc::new(InMemoryUserRepository::new());

        Self {
            film_service: Arc::new(FilmService::new(film_repository, user_repository.clone())),
            user_service: Arc::new(UserService::new(user_repository)),
            popular_default_count,
        }
    }
}
