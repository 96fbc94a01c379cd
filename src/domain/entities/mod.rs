//! Core domain entities representing the catalogue data model.
//!
//! Entities are plain data structures; the only behaviour they carry is
//! applying an update in place and the "blank name falls back to login" rule.
//!
//! # Entity Types
//!
//! - [`Film`] - A catalogued film and the users who liked it
//! - [`User`] - A registered user and their friends
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! - `NewFilm`, `NewUser` - For creating new records
//! - `FilmUpdate`, `UserUpdate` - For full-field replacement

pub mod film;
pub mod user;

pub use film::{Film, FilmUpdate, NewFilm};
pub use user::{NewUser, User, UserUpdate};
