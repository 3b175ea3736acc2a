/// Repository module
///
/// This module provides the data access layer for the application.
/// It contains functions for interacting with the database, including
/// creating, retrieving, updating, and deleting users and rooms.
///
/// The repository pattern abstracts away the details of database access
/// and provides a clean API for the rest of the application to use.
/// Store error codes are classified here: handlers only ever see the
/// `RepoError` variants, never Diesel's own error encoding.

mod room_repo;
mod user_repo;

// Re-export all repository functions
pub use room_repo::*;
pub use user_repo::*;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors produced by the repository layer
#[derive(Error, Debug)]
pub enum RepoError {
    /// No record matched the given key
    #[error("record not found")]
    NotFound,

    /// A unique constraint was violated; the only unique column in the
    /// schema is `users.email`
    #[error("email already exists")]
    DuplicateEmail,

    /// Unable to get a connection from the pool
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(DieselError),
}

impl From<DieselError> for RepoError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepoError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepoError::DuplicateEmail
            }
            other => RepoError::Database(other),
        }
    }
}
