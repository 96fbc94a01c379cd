//! DTOs for film endpoints.

use crate::domain::entities::{FilmUpdate, NewFilm};
use crate::error::AppError;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: u64 = 200;

/// The first public film screening; nothing can be released before it.
pub static EARLIEST_RELEASE_DATE: LazyLock<NaiveDate> =
    LazyLock::new(|| NaiveDate::from_ymd_opt(1895, 12, 28).unwrap());

/// Film body accepted by `POST /films` and `PUT /films`.
///
/// `id` is ignored on create and mandatory on update. `userLikes` is only
/// honoured on create; likes are otherwise managed through the like endpoints.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilmRequest {
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(
        max = 200,
        message = "Description must not exceed 200 characters"
    ))]
    pub description: String,

    #[validate(custom(function = "validate_release_date"))]
    pub release_date: NaiveDate,

    /// Running time in minutes.
    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    pub duration: i64,

    #[serde(default)]
    pub user_likes: Option<BTreeSet<i64>>,
}

impl FilmRequest {
    pub fn into_new_film(self) -> NewFilm {
        NewFilm {
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            user_likes: self.user_likes.unwrap_or_default(),
        }
    }

    /// Converts an update body, which must name the film it replaces.
    pub fn into_update(self) -> Result<FilmUpdate, AppError> {
        let Some(id) = self.id else {
            tracing::warn!("Received film update without id");
            return Err(AppError::bad_request(
                "Id must be provided",
                json!({ "field": "id" }),
            ));
        };

        Ok(FilmUpdate {
            id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
        })
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Name must not be blank".into()));
    }
    Ok(())
}

fn validate_release_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < *EARLIEST_RELEASE_DATE {
        return Err(ValidationError::new("release_date")
            .with_message("Release date must not be earlier than 1895-12-28".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> FilmRequest {
        serde_json::from_value(json).unwrap()
    }

    fn valid() -> serde_json::Value {
        json!({
            "name": "Matrix",
            "description": "A hacker learns the truth",
            "releaseDate": "1999-03-31",
            "duration": 136
        })
    }

    #[test]
    fn test_valid_film_passes() {
        assert!(request(valid()).validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut body = valid();
        body["name"] = json!("  ");
        assert!(request(body).validate().is_err());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let mut body = valid();
        body.as_object_mut().unwrap().remove("name");
        assert!(request(body).validate().is_err());
    }

    #[test]
    fn test_description_boundary() {
        let mut body = valid();
        body["description"] = json!("d".repeat(MAX_DESCRIPTION_LENGTH as usize));
        assert!(request(body.clone()).validate().is_ok());

        body["description"] = json!("d".repeat(MAX_DESCRIPTION_LENGTH as usize + 1));
        assert!(request(body).validate().is_err());
    }

    #[test]
    fn test_release_date_boundary() {
        let mut body = valid();
        body["releaseDate"] = json!("1895-12-28");
        assert!(request(body.clone()).validate().is_ok());

        body["releaseDate"] = json!("1895-12-27");
        assert!(request(body).validate().is_err());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let mut body = valid();
        body["duration"] = json!(0);
        assert!(request(body).validate().is_err());
    }

    #[test]
    fn test_missing_duration_fails_to_parse() {
        let mut body = valid();
        body.as_object_mut().unwrap().remove("duration");
        assert!(serde_json::from_value::<FilmRequest>(body).is_err());
    }

    #[test]
    fn test_into_update_requires_id() {
        let result = request(valid()).into_update();
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_into_new_film_defaults_likes() {
        let film = request(valid()).into_new_film();
        assert!(film.user_likes.is_empty());
    }
}
