use chrono::NaiveDate;
use filmorate::domain::entities::{FilmUpdate, NewFilm};
use filmorate::domain::repositories::FilmRepository;
use filmorate::error::AppError;
use filmorate::infrastructure::persistence::InMemoryFilmRepository;
use std::collections::BTreeSet;

fn new_film(name: &str) -> NewFilm {
    NewFilm {
        name: name.to_string(),
        description: "description".to_string(),
        release_date: NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
        duration: 136,
        user_likes: BTreeSet::new(),
    }
}

#[tokio::test]
async fn test_create_film() {
    let repo = InMemoryFilmRepository::new();

    let film = repo.create(new_film("Matrix")).await.unwrap();

    assert_eq!(film.id, 1);
    assert_eq!(film.name, "Matrix");
    assert!(film.user_likes.is_empty());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_keeps_initial_likes() {
    let repo = InMemoryFilmRepository::new();

    let mut film = new_film("Matrix");
    film.user_likes.insert(4);
    let film = repo.create(film).await.unwrap();

    assert_eq!(film.user_likes, BTreeSet::from([4]));
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = InMemoryFilmRepository::new();
    repo.create(new_film("Matrix")).await.unwrap();

    assert!(repo.find_by_id(1).await.unwrap().is_some());
    assert!(repo.find_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let repo = InMemoryFilmRepository::new();
    repo.create(new_film("Matrix")).await.unwrap();
    repo.add_like(1, 9).await.unwrap();

    let updated = repo
        .update(FilmUpdate {
            id: 1,
            name: "The Matrix".to_string(),
            description: "new".to_string(),
            release_date: NaiveDate::from_ymd_opt(1999, 3, 24).unwrap(),
            duration: 138,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "The Matrix");
    assert_eq!(updated.description, "new");
    assert_eq!(updated.user_likes, BTreeSet::from([9]));

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_like_then_unlike_restores_original() {
    let repo = InMemoryFilmRepository::new();
    let original = repo.create(new_film("Matrix")).await.unwrap();

    repo.add_like(original.id, 3).await.unwrap();
    let film = repo.remove_like(original.id, 3).await.unwrap();

    assert_eq!(film.user_likes, original.user_likes);
}

#[tokio::test]
async fn test_remove_missing_like_is_noop() {
    let repo = InMemoryFilmRepository::new();
    repo.create(new_film("Matrix")).await.unwrap();

    let film = repo.remove_like(1, 3).await.unwrap();

    assert!(film.user_likes.is_empty());
}

#[tokio::test]
async fn test_like_unknown_film() {
    let repo = InMemoryFilmRepository::new();

    let result = repo.add_like(1, 1).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_get_popular() {
    let repo = InMemoryFilmRepository::new();
    repo.create(new_film("Matrix")).await.unwrap();
    repo.create(new_film("Other")).await.unwrap();

    repo.add_like(1, 1).await.unwrap();
    repo.add_like(1, 2).await.unwrap();
    repo.add_like(2, 1).await.unwrap();

    let top = repo.get_popular(1).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, 1);

    let all = repo.get_popular(100).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].like_count() >= all[1].like_count());

    assert!(repo.get_popular(0).await.unwrap().is_empty());
}
