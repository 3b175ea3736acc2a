use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::auth;
use crate::db::DbPool;
use crate::dto::{ApiResponse, UserBodyDto};
use crate::errors::ApiError;
use crate::handlers::parse_int_param;
use crate::models::{NewUser, User, UserChanges};
use crate::repo::{self, RepoError};

/// Handler for listing all users
///
/// This function handles GET requests to `/users`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
///
/// ### Returns
///
/// All users wrapped in the success envelope
#[instrument(skip(pool))]
pub async fn list_users_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    debug!("Listing all users");

    let users = repo::list_users(&pool)
        .map_err(|e| ApiError::internal(e, "Unable to fetch users"))?;

    info!("Retrieved {} users", users.len());

    Ok(Json(ApiResponse::success(
        "Users retrieved successfully",
        users,
    )))
}

/// Handler for retrieving a specific user
///
/// This function handles GET requests to `/users/{id}`. A non-numeric id
/// yields 400 before the repository is consulted; a valid id with no
/// matching record yields 404.
#[instrument(skip(pool), fields(user_id = %raw_id))]
pub async fn get_user_handler(
    State(pool): State<Arc<DbPool>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user_id = parse_int_param(&raw_id, "Invalid user id")?;

    let user = repo::get_user(&pool, user_id)
        .map_err(|e| ApiError::internal(e, "Unable to fetch user"))?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(ApiResponse::success(
        "User retrieved successfully",
        user,
    )))
}

/// Handler for creating a new user
///
/// This function handles POST requests to `/users`. The `name` field is
/// required; `tel` defaults to null and `role` to "user". The password is
/// hashed before it reaches the repository, and email uniqueness is
/// enforced by the store's unique index, so a duplicate surfaces as
/// `RepoError::DuplicateEmail` without a separate existence check.
#[instrument(skip(pool, payload))]
pub async fn create_user_handler(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<UserBodyDto>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let Some(name) = payload.name.filter(|n| !n.is_empty()) else {
        return Err(ApiError::InvalidBody("name, email and password are required"));
    };

    let password = hash_if_present(payload.password.as_deref(), "Unable to create user")?;

    let user = repo::create_user(
        &pool,
        NewUser::new(name, payload.email, password, payload.tel, payload.role),
    )
    .map_err(|e| match e {
        RepoError::DuplicateEmail => ApiError::EmailExists,
        other => ApiError::internal(other, "Unable to create user"),
    })?;

    info!("Successfully created user with id: {}", user.get_id());

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

/// Handler for updating a user
///
/// This function handles PUT requests to `/users/{id}`. This is a full
/// overwrite, not a patch: fields omitted from the body are not preserved
/// from the prior record.
#[instrument(skip(pool, payload), fields(user_id = %raw_id))]
pub async fn update_user_handler(
    State(pool): State<Arc<DbPool>>,
    Path(raw_id): Path<String>,
    Json(payload): Json<UserBodyDto>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user_id = parse_int_param(&raw_id, "Invalid user id")?;

    let Some(name) = payload.name.filter(|n| !n.is_empty()) else {
        return Err(ApiError::InvalidBody("name is required"));
    };

    let password = hash_if_present(payload.password.as_deref(), "Unable to update user")?;

    let user = repo::update_user(
        &pool,
        user_id,
        UserChanges::new(name, payload.email, password, payload.tel, payload.role),
    )
    .map_err(|e| match e {
        RepoError::NotFound => ApiError::NotFound("User"),
        RepoError::DuplicateEmail => ApiError::EmailExists,
        other => ApiError::internal(other, "Unable to update user"),
    })?;

    info!("Successfully updated user with id: {}", user_id);

    Ok(Json(ApiResponse::success(
        "User updated successfully",
        user,
    )))
}

/// Handler for deleting a user
///
/// This function handles DELETE requests to `/users/{id}` and returns the
/// deleted record's prior state.
#[instrument(skip(pool), fields(user_id = %raw_id))]
pub async fn delete_user_handler(
    State(pool): State<Arc<DbPool>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user_id = parse_int_param(&raw_id, "Invalid user id")?;

    let user = repo::delete_user(&pool, user_id).map_err(|e| match e {
        RepoError::NotFound => ApiError::NotFound("User"),
        other => ApiError::internal(other, "Unable to delete user"),
    })?;

    info!("Successfully deleted user with id: {}", user_id);

    Ok(Json(ApiResponse::success(
        "User deleted successfully",
        user,
    )))
}

/// Hashes the password when one was supplied
fn hash_if_present(
    password: Option<&str>,
    detail: &'static str,
) -> Result<Option<String>, ApiError> {
    password
        .map(|plain| auth::hash_password(plain).map_err(|e| ApiError::internal(e, detail)))
        .transpose()
}
