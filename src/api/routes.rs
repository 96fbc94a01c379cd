//! API route configuration.

use crate::api::handlers::{
    add_friend_handler, add_like_handler, common_friends_handler, create_film_handler,
    create_user_handler, film_list_handler, friends_handler, popular_films_handler,
    remove_friend_handler, remove_like_handler, update_film_handler, update_user_handler,
    user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Film catalogue routes.
///
/// # Endpoints
///
/// - `GET    /films`                     - List films
/// - `POST   /films`                     - Create a film
/// - `PUT    /films`                     - Replace a film's fields
/// - `PUT    /films/{id}/like/{userId}`  - Like a film
/// - `DELETE /films/{id}/like/{userId}`  - Withdraw a like
/// - `GET    /films/popular?count=N`     - Most liked films
pub fn film_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/films",
            get(film_list_handler)
                .post(create_film_handler)
                .put(update_film_handler),
        )
        .route("/films/popular", get(popular_films_handler))
        .route(
            "/films/{id}/like/{user_id}",
            put(add_like_handler).delete(remove_like_handler),
        )
}

/// User and friendship routes.
///
/// # Endpoints
///
/// - `GET    /users`                              - List users
/// - `POST   /users`                              - Register a user
/// - `PUT    /users`                              - Replace a user's fields
/// - `PUT    /users/{id}/friends/{friendId}`      - Add a friend (both ways)
/// - `DELETE /users/{id}/friends/{friendId}`      - Remove a friend (both ways)
/// - `GET    /users/{id}/friends`                 - List friends
/// - `GET    /users/{id}/friends/common/{otherId}` - Friends shared by two users
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(user_list_handler)
                .post(create_user_handler)
                .put(update_user_handler),
        )
        .route(
            "/users/{id}/friends/{friend_id}",
            put(add_friend_handler).delete(remove_friend_handler),
        )
        .route("/users/{id}/friends", get(friends_handler))
        .route(
            "/users/{id}/friends/common/{other_id}",
            get(common_friends_handler),
        )
}
