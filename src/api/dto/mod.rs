//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for JSON deserialization and `validator` for field
//! rules. Entities are serialized directly as response bodies.

pub mod film;
pub mod health;
pub mod popular;
pub mod user;
