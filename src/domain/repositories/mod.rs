//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//! The only implementations today keep everything in process memory, but
//! callers depend on the traits so a persistent backend can be added later.
//!
//! # Available Repositories
//!
//! - [`FilmRepository`] - Film CRUD, likes and popularity ranking
//! - [`UserRepository`] - User CRUD and the friendship relation
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for service tests.
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod film_repository;
pub mod user_repository;

pub use film_repository::FilmRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use film_repository::MockFilmRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
