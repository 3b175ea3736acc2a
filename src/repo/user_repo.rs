use crate::db::DbPool;
use crate::models::{NewUser, User, UserChanges};
use crate::repo::RepoError;
use crate::schema::users;
use diesel::prelude::*;

/// Lists all users in the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
///
/// ### Returns
///
/// A Result containing a vector of all Users in the database
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails
pub fn list_users(pool: &DbPool) -> Result<Vec<User>, RepoError> {
    let conn = &mut pool.get()?;

    // Query the database for all users
    let result = users::table
        .select(User::as_select())
        .load::<User>(conn)?;

    Ok(result)
}

/// Retrieves a user from the database by its ID
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `user_id` - The ID of the user to retrieve
///
/// ### Returns
///
/// A Result containing the User if found, or None if no user has that ID
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails
pub fn get_user(pool: &DbPool, user_id: i32) -> Result<Option<User>, RepoError> {
    let conn = &mut pool.get()?;

    let result = users::table
        .find(user_id)
        .select(User::as_select())
        .first::<User>(conn)
        .optional()?;

    Ok(result)
}

/// Creates a new user in the database
///
/// Email uniqueness is enforced by a unique index on `users.email`, so a
/// duplicate insert fails with `RepoError::DuplicateEmail` instead of
/// relying on a separate existence check.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `new_user` - The user to insert, with the password already hashed
///
/// ### Returns
///
/// A Result containing the newly created User with its assigned ID
///
/// ### Errors
///
/// Returns `RepoError::DuplicateEmail` if the email is already taken, or
/// another error if the connection or insert fails
pub fn create_user(pool: &DbPool, new_user: NewUser) -> Result<User, RepoError> {
    let conn = &mut pool.get()?;

    let user = diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(conn)?;

    Ok(user)
}

/// Overwrites a user record by its ID
///
/// This is a full-record update: every column is rewritten from the
/// changeset, so optional fields absent from the request become NULL.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `user_id` - The ID of the user to update
/// * `changes` - The replacement values for every column
///
/// ### Returns
///
/// A Result containing the updated User
///
/// ### Errors
///
/// Returns `RepoError::NotFound` if no user has that ID, or
/// `RepoError::DuplicateEmail` if the new email is already taken
pub fn update_user(pool: &DbPool, user_id: i32, changes: UserChanges) -> Result<User, RepoError> {
    let conn = &mut pool.get()?;

    let user = diesel::update(users::table.find(user_id))
        .set(&changes)
        .returning(User::as_returning())
        .get_result(conn)?;

    Ok(user)
}

/// Deletes a user by its ID
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `user_id` - The ID of the user to delete
///
/// ### Returns
///
/// A Result containing the deleted User's prior state
///
/// ### Errors
///
/// Returns `RepoError::NotFound` if no user has that ID
pub fn delete_user(pool: &DbPool, user_id: i32) -> Result<User, RepoError> {
    let conn = &mut pool.get()?;

    let user = diesel::delete(users::table.find(user_id))
        .returning(User::as_returning())
        .get_result(conn)?;

    Ok(user)
}
