//! In-memory repository implementations.
//!
//! State lives only for the lifetime of the process. Each repository owns its
//! map and id counter; nothing is global.
//!
//! # Repositories
//!
//! - [`InMemoryFilmRepository`] - Film storage, likes and popularity ranking
//! - [`InMemoryUserRepository`] - User storage and friendships

pub mod memory_film_repository;
pub mod memory_user_repository;

pub use memory_film_repository::InMemoryFilmRepository;
pub use memory_user_repository::InMemoryUserRepository;
