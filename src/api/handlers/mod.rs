//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod films;
pub mod health;
pub mod users;

pub use films::{
    add_like_handler, create_film_handler, film_list_handler, popular_films_handler,
    remove_like_handler, update_film_handler,
};
pub use health::health_handler;
pub use users::{
    add_friend_handler, common_friends_handler, create_user_handler, friends_handler,
    remove_friend_handler, update_user_handler, user_list_handler,
};
