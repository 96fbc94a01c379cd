//! Repository trait for users and friendships.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users and the friendship relation.
///
/// Friendship is symmetric: implementations must update both users of a
/// pair atomically so no reader observes a one-sided friendship.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Returns whether a user with this id exists.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Stores a new user under the next free id.
    ///
    /// A blank or missing name is replaced by the login.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Replaces the scalar fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has `update.id`.
    async fn update(&self, update: UserUpdate) -> Result<User, AppError>;

    /// Makes two users friends of each other and returns all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either user does not exist.
    async fn add_friend(&self, id: i64, friend_id: i64) -> Result<Vec<User>, AppError>;

    /// Ends a friendship on both sides and returns all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either user does not exist.
    async fn remove_friend(&self, id: i64, friend_id: i64) -> Result<Vec<User>, AppError>;

    /// Returns the friends of a user ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn find_friends(&self, id: i64) -> Result<Vec<User>, AppError>;

    /// Returns users that are friends with both `id` and `other_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either user does not exist.
    async fn find_common_friends(&self, id: i64, other_id: i64) -> Result<Vec<User>, AppError>;

    /// Number of stored users.
    async fn count(&self) -> Result<usize, AppError>;
}
