//! Domain entity representing a catalogued film.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// A film in the catalogue together with the ids of users who liked it.
///
/// The like set only ever contains ids of users that existed when the like
/// was recorded. Serialized with camelCase keys (`releaseDate`, `userLikes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration: i64,
    pub user_likes: BTreeSet<i64>,
}

impl Film {
    pub fn new(id: i64, new_film: NewFilm) -> Self {
        Self {
            id,
            name: new_film.name,
            description: new_film.description,
            release_date: new_film.release_date,
            duration: new_film.duration,
            user_likes: new_film.user_likes,
        }
    }

    pub fn like_count(&self) -> usize {
        self.user_likes.len()
    }

    /// Overwrites every scalar field. Likes are left as they are.
    pub fn apply(&mut self, update: FilmUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.release_date = update.release_date;
        self.duration = update.duration;
    }
}

/// Input data for creating a new film.
///
/// `user_likes` is empty unless the caller supplied an initial set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub user_likes: BTreeSet<i64>,
}

/// Full replacement of a film's scalar fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmUpdate {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
}
