//! DTOs for user endpoints.

use crate::domain::entities::{NewUser, UserUpdate};
use crate::error::AppError;
use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// A login is one or more non-whitespace characters.
static LOGIN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+$").unwrap());

/// User body accepted by `POST /users` and `PUT /users`.
///
/// `id` is ignored on create and mandatory on update. A blank or missing
/// `name` is replaced by the login. Friends are never taken from the body.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Email must not be blank"))]
    #[validate(contains(pattern = "@", message = "Email must contain '@'"))]
    pub email: String,

    #[serde(default)]
    #[validate(regex(
        path = "*LOGIN_REGEX",
        message = "Login must not be blank or contain spaces"
    ))]
    pub login: String,

    pub name: Option<String>,

    #[validate(custom(function = "validate_birthday"))]
    pub birthday: NaiveDate,
}

impl UserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            email: self.email,
            login: self.login,
            name: self.name,
            birthday: self.birthday,
        }
    }

    /// Converts an update body, which must name the user it replaces.
    pub fn into_update(self) -> Result<UserUpdate, AppError> {
        let Some(id) = self.id else {
            tracing::warn!("Received user update without id");
            return Err(AppError::bad_request(
                "Id must be provided",
                json!({ "field": "id" }),
            ));
        };

        Ok(UserUpdate {
            id,
            email: self.email,
            login: self.login,
            name: self.name,
            birthday: self.birthday,
        })
    }
}

fn validate_birthday(birthday: &NaiveDate) -> Result<(), ValidationError> {
    if *birthday > Local::now().date_naive() {
        return Err(ValidationError::new("birthday")
            .with_message("Birthday must not be in the future".into()));
    }
    Ok(())
}
