//! User and friendship service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for users and the (always mutual) friendship relation.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every user.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Registers a new user. Emails are not required to be unique.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, login = %user.login, "User created");
        Ok(user)
    }

    /// Replaces a user's email, login, name and birthday.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn update(&self, update: UserUpdate) -> Result<User, AppError> {
        let user = self.repository.update(update).await?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// Makes two users friends and returns every user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if both ids are the same.
    /// Returns [`AppError::NotFound`] if either user does not exist.
    pub async fn add_friend(&self, id: i64, friend_id: i64) -> Result<Vec<User>, AppError> {
        Self::ensure_distinct(id, friend_id)?;

        let users = self.repository.add_friend(id, friend_id).await?;
        tracing::info!(user_id = id, friend_id, "Friendship added");
        Ok(users)
    }

    /// Ends a friendship on both sides and returns every user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if both ids are the same.
    /// Returns [`AppError::NotFound`] if either user does not exist.
    pub async fn remove_friend(&self, id: i64, friend_id: i64) -> Result<Vec<User>, AppError> {
        Self::ensure_distinct(id, friend_id)?;

        let users = self.repository.remove_friend(id, friend_id).await?;
        tracing::info!(user_id = id, friend_id, "Friendship removed");
        Ok(users)
    }

    /// Lists a user's friends.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn find_friends(&self, id: i64) -> Result<Vec<User>, AppError> {
        self.repository.find_friends(id).await
    }

    /// Lists users who are friends with both users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either user does not exist.
    pub async fn find_common_friends(&self, id: i64, other_id: i64) -> Result<Vec<User>, AppError> {
        self.repository.find_common_friends(id, other_id).await
    }

    /// Number of registered users.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    fn ensure_distinct(id: i64, friend_id: i64) -> Result<(), AppError> {
        if id == friend_id {
            tracing::warn!(user_id = id, "Rejected self-friendship");
            return Err(AppError::bad_request(
                "A user cannot be their own friend",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }
}
