//! # Filmorate
//!
//! A small film catalogue service built with Axum: films, users, likes on
//! films and mutual friendships, all held in process memory.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services over the repositories
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs with validation, middleware
//!
//! ## Features
//!
//! - Film and user CRUD with field validation
//! - Likes and a most-liked ranking (`/films/popular`)
//! - Symmetric friendships and common-friend lookup
//! - Structured logging in text or JSON
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FilmService, UserService};
    pub use crate::domain::entities::{Film, NewFilm, NewUser, User};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
