//! Domain entity representing a registered user.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// A user and the ids of their friends.
///
/// Friendship is reciprocal: storage keeps `a.friends` and `b.friends` in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: BTreeSet<i64>,
}

impl User {
    /// Creates a user with no friends. A blank name falls back to the login.
    pub fn new(id: i64, new_user: NewUser) -> Self {
        let name = resolve_name(&new_user.login, new_user.name);
        Self {
            id,
            email: new_user.email,
            login: new_user.login,
            name,
            birthday: new_user.birthday,
            friends: BTreeSet::new(),
        }
    }

    /// Overwrites every scalar field. Friends are left as they are.
    pub fn apply(&mut self, update: UserUpdate) {
        self.name = resolve_name(&update.login, update.name);
        self.email = update.email;
        self.login = update.login;
        self.birthday = update.birthday;
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

/// Full replacement of a user's scalar fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

fn resolve_name(login: &str, name: Option<String>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            tracing::trace!(login, "Blank user name, using login instead");
            login.to_string()
        }
    }
}
