//! Business logic services for the application layer.

pub mod film_service;
pub mod user_service;

pub use film_service::FilmService;
pub use user_service::UserService;
