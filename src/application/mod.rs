//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//! Apart from cross-checking user ids on likes, they forward to storage.
//!
//! # Available Services
//!
//! - [`services::film_service::FilmService`] - Films, likes and popularity
//! - [`services::user_service::UserService`] - Users and friendships

pub mod services;
