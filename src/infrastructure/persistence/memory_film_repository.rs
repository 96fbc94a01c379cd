//! In-memory implementation of the film repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Film, FilmUpdate, NewFilm};
use crate::domain::repositories::FilmRepository;
use crate::error::AppError;

/// Films keyed by id plus the next id to hand out.
struct FilmStore {
    films: BTreeMap<i64, Film>,
    next_id: i64,
}

impl FilmStore {
    fn get_mut(&mut self, id: i64) -> Result<&mut Film, AppError> {
        self.films
            .get_mut(&id)
            .ok_or_else(|| AppError::film_not_found(id))
    }
}

/// Process-local film storage.
///
/// The whole store sits behind one `RwLock`, so every operation observes and
/// leaves a consistent map. Ids come from a monotonic counter starting at 1.
pub struct InMemoryFilmRepository {
    store: RwLock<FilmStore>,
}

impl InMemoryFilmRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(FilmStore {
                films: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryFilmRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn find_all(&self) -> Result<Vec<Film>, AppError> {
        let store = self.store.read().await;
        Ok(store.films.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Film>, AppError> {
        let store = self.store.read().await;
        Ok(store.films.get(&id).cloned())
    }

    async fn create(&self, new_film: NewFilm) -> Result<Film, AppError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let film = Film::new(id, new_film);
        store.films.insert(id, film.clone());
        debug!(film_id = id, "Film stored");

        Ok(film)
    }

    async fn update(&self, update: FilmUpdate) -> Result<Film, AppError> {
        let mut store = self.store.write().await;

        let film = store.get_mut(update.id)?;
        film.apply(update);

        Ok(film.clone())
    }

    async fn add_like(&self, film_id: i64, user_id: i64) -> Result<Film, AppError> {
        let mut store = self.store.write().await;

        let film = store.get_mut(film_id)?;
        film.user_likes.insert(user_id);

        Ok(film.clone())
    }

    async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<Film, AppError> {
        let mut store = self.store.write().await;

        let film = store.get_mut(film_id)?;
        film.user_likes.remove(&user_id);

        Ok(film.clone())
    }

    async fn get_popular(&self, count: usize) -> Result<Vec<Film>, AppError> {
        let store = self.store.read().await;

        // Values come out in id order and the sort is stable, so ties stay by id.
        let mut films: Vec<&Film> = store.films.values().collect();
        films.sort_by(|a, b| b.like_count().cmp(&a.like_count()));

        Ok(films.into_iter().take(count).cloned().collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.store.read().await.films.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn new_film(name: &str) -> NewFilm {
        NewFilm {
            name: name.to_string(),
            description: "description".to_string(),
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            duration: 100,
            user_likes: BTreeSet::new(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let repo = InMemoryFilmRepository::new();

        let first = repo.create(new_film("first")).await.unwrap();
        let second = repo.create(new_film("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_popular_breaks_ties_by_id() {
        let repo = InMemoryFilmRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(new_film(name)).await.unwrap();
        }
        repo.add_like(3, 10).await.unwrap();

        let ids: Vec<i64> = repo
            .get_popular(10)
            .await
            .unwrap()
            .iter()
            .map(|f| f.id)
            .collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_update_unknown_film_is_not_found() {
        let repo = InMemoryFilmRepository::new();

        let result = repo
            .update(FilmUpdate {
                id: 5,
                name: "ghost".to_string(),
                description: String::new(),
                release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                duration: 1,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
