/// Innkeeper: a user and room management API
///
/// This library provides a small REST API over two relational entities,
/// users and rooms, backed by SQLite through Diesel.
///
/// ### Modules
///
/// - `auth`: Password hashing
/// - `config`: Layered application configuration
/// - `db`: Database connection management
/// - `dto`: Request bodies and the response envelope
/// - `errors`: The API error taxonomy
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures representing users and rooms
/// - `repo`: Repository layer for database operations
/// - `schema`: Database schema definitions
///
/// ### Web API
///
/// The library exposes a RESTful API using Axum. Every response uses the
/// envelope `{status, message, data?, error?}`:
///
/// - `GET /users`, `POST /users`
/// - `GET|PUT|DELETE /users/{id}`
/// - `GET /rooms`, `POST /rooms`
/// - `GET /rooms/q/capacity/{capacity}`
/// - `GET /rooms/q/capacity/{min}/{max}`
/// - `GET|PUT|DELETE /rooms/{id}`

/// Password hashing module
pub mod auth;

/// Configuration module
pub mod config;

/// Database connection module
pub mod db;

/// Request and response shapes
pub mod dto;

/// API error taxonomy
pub mod errors;

/// Web API handlers
pub mod handlers;

/// Data models module
pub mod models;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

use axum::{Router, routing::get};
use std::sync::Arc;

use handlers::{
    create_room_handler, create_user_handler, delete_room_handler, delete_user_handler,
    get_room_handler, get_rooms_by_capacity_handler, get_rooms_by_capacity_range_handler,
    get_user_handler, list_rooms_handler, list_users_handler, update_room_handler,
    update_user_handler,
};

/// Creates the application router with all routes
///
/// The capacity query routes live under the literal `/rooms/q/...` prefix;
/// axum's router prefers literal segments over captures, so `q` is never
/// parsed as a room id.
///
/// ### Arguments
///
/// * `pool` - The database connection pool to be shared with all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes and the database pool as state
pub fn create_app(pool: Arc<db::DbPool>) -> Router {
    Router::new()
        // User collection routes
        .route("/users", get(list_users_handler).post(create_user_handler))
        // User by-id routes
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        // Room collection routes
        .route("/rooms", get(list_rooms_handler).post(create_room_handler))
        // Capacity queries, exact and inclusive range
        .route(
            "/rooms/q/capacity/{capacity}",
            get(get_rooms_by_capacity_handler),
        )
        .route(
            "/rooms/q/capacity/{min}/{max}",
            get(get_rooms_by_capacity_range_handler),
        )
        // Room by-id routes
        .route(
            "/rooms/{id}",
            get(get_room_handler)
                .put(update_room_handler)
                .delete(delete_room_handler),
        )
        // Add the database pool to the application state
        .with_state(pool)
}

/// Runs the embedded migrations
///
/// This function applies all database migrations to set up the schema.
///
/// ### Arguments
///
/// * `conn` - A mutable reference to a SQLite connection
///
/// ### Panics
///
/// This function will panic if the migrations fail to run
pub fn run_migrations(conn: &mut diesel::SqliteConnection) {
    use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

    // Define the embedded migrations
    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    // Run all pending migrations
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
}
