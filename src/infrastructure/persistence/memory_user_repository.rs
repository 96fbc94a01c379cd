//! In-memory implementation of the user repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Users keyed by id plus the next id to hand out.
struct UserStore {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl UserStore {
    fn get(&self, id: i64) -> Result<&User, AppError> {
        self.users
            .get(&id)
            .ok_or_else(|| AppError::user_not_found(id))
    }

    fn get_mut(&mut self, id: i64) -> Result<&mut User, AppError> {
        self.users
            .get_mut(&id)
            .ok_or_else(|| AppError::user_not_found(id))
    }

    fn resolve(&self, ids: impl Iterator<Item = i64>) -> Vec<User> {
        ids.filter_map(|id| self.users.get(&id).cloned()).collect()
    }

    fn all(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }
}

/// Process-local user storage.
///
/// Both sides of a friendship are written under the same write guard, so
/// the relation is never observed half-applied.
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(UserStore {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.read().await.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.store.read().await.users.contains_key(&id))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let user = User::new(id, new_user);
        store.users.insert(id, user.clone());
        debug!(user_id = id, "User stored");

        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> Result<User, AppError> {
        let mut store = self.store.write().await;

        let user = store.get_mut(update.id)?;
        user.apply(update);

        Ok(user.clone())
    }

    async fn add_friend(&self, id: i64, friend_id: i64) -> Result<Vec<User>, AppError> {
        let mut store = self.store.write().await;

        store.get(id)?;
        store.get(friend_id)?;

        store.get_mut(id)?.friends.insert(friend_id);
        store.get_mut(friend_id)?.friends.insert(id);

        Ok(store.all())
    }

    async fn remove_friend(&self, id: i64, friend_id: i64) -> Result<Vec<User>, AppError> {
        let mut store = self.store.write().await;

        store.get(id)?;
        store.get(friend_id)?;

        store.get_mut(id)?.friends.remove(&friend_id);
        store.get_mut(friend_id)?.friends.remove(&id);

        Ok(store.all())
    }

    async fn find_friends(&self, id: i64) -> Result<Vec<User>, AppError> {
        let store = self.store.read().await;

        let user = store.get(id)?;
        Ok(store.resolve(user.friends.iter().copied()))
    }

    async fn find_common_friends(&self, id: i64, other_id: i64) -> Result<Vec<User>, AppError> {
        let store = self.store.read().await;

        let user = store.get(id)?;
        let other = store.get(other_id)?;

        Ok(store.resolve(user.friends.intersection(&other.friends).copied()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.store.read().await.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_user(login: &str) -> NewUser {
        NewUser {
            email: format!("{login}@example.com"),
            login: login.to_string(),
            name: None,
            birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_add_friend_is_symmetric() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(new_user("alice")).await.unwrap();
        let b = repo.create(new_user("bob")).await.unwrap();

        let all = repo.add_friend(a.id, b.id).await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all[0].friends.contains(&b.id));
        assert!(all[1].friends.contains(&a.id));
    }

    #[tokio::test]
    async fn test_add_friend_unknown_leaves_state_untouched() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create(new_user("alice")).await.unwrap();

        let result = repo.add_friend(a.id, 99).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
        let a = repo.find_by_id(a.id).await.unwrap().unwrap();
        assert!(a.friends.is_empty());
    }

    #[tokio::test]
    async fn test_common_friends_is_intersection() {
        let repo = InMemoryUserRepository::new();
        for login in ["a", "b", "c", "d"] {
            repo.create(new_user(login)).await.unwrap();
        }
        repo.add_friend(1, 3).await.unwrap();
        repo.add_friend(1, 4).await.unwrap();
        repo.add_friend(2, 3).await.unwrap();

        let common = repo.find_common_friends(1, 2).await.unwrap();

        assert_eq!(common.len(), 1);
        assert_eq!(common[0].id, 3);
    }
}
