use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::DbPool;
use crate::dto::{ApiResponse, RoomBodyDto};
use crate::errors::ApiError;
use crate::handlers::parse_int_param;
use crate::models::{NewRoom, Room, RoomChanges};
use crate::repo::{self, RepoError};

/// Handler for listing all rooms
///
/// This function handles GET requests to `/rooms`.
#[instrument(skip(pool))]
pub async fn list_rooms_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    debug!("Listing all rooms");

    let rooms = repo::list_rooms(&pool)
        .map_err(|e| ApiError::internal(e, "Unable to fetch rooms"))?;

    info!("Retrieved {} rooms", rooms.len());

    Ok(Json(ApiResponse::success(
        "Rooms retrieved successfully",
        rooms,
    )))
}

/// Handler for listing rooms with an exact capacity
///
/// This function handles GET requests to `/rooms/q/capacity/{capacity}`.
#[instrument(skip(pool), fields(capacity = %raw_capacity))]
pub async fn get_rooms_by_capacity_handler(
    State(pool): State<Arc<DbPool>>,
    Path(raw_capacity): Path<String>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let capacity = parse_int_param(&raw_capacity, "Invalid capacity")?;

    let rooms = repo::get_rooms_by_capacity(&pool, capacity)
        .map_err(|e| ApiError::internal(e, "Unable to fetch rooms"))?;

    info!("Retrieved {} rooms with capacity {}", rooms.len(), capacity);

    Ok(Json(ApiResponse::success(
        "Rooms retrieved successfully",
        rooms,
    )))
}

/// Handler for listing rooms with capacity in an inclusive range
///
/// This function handles GET requests to `/rooms/q/capacity/{min}/{max}`.
/// Both bounds must parse as integers and are inclusive.
#[instrument(skip(pool), fields(min = %raw_min, max = %raw_max))]
pub async fn get_rooms_by_capacity_range_handler(
    State(pool): State<Arc<DbPool>>,
    Path((raw_min, raw_max)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let min = parse_int_param(&raw_min, "Invalid capacity")?;
    let max = parse_int_param(&raw_max, "Invalid capacity")?;

    let rooms = repo::get_rooms_by_capacity_range(&pool, min, max)
        .map_err(|e| ApiError::internal(e, "Unable to fetch rooms"))?;

    info!(
        "Retrieved {} rooms with capacity between {} and {}",
        rooms.len(),
        min,
        max
    );

    Ok(Json(ApiResponse::success(
        "Rooms retrieved successfully",
        rooms,
    )))
}

/// Handler for retrieving a specific room
///
/// This function handles GET requests to `/rooms/{id}`.
#[instrument(skip(pool), fields(room_id = %raw_id))]
pub async fn get_room_handler(
    State(pool): State<Arc<DbPool>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    let room_id = parse_int_param(&raw_id, "Invalid room id")?;

    let room = repo::get_room(&pool, room_id)
        .map_err(|e| ApiError::internal(e, "Unable to fetch room"))?
        .ok_or(ApiError::NotFound("Room"))?;

    Ok(Json(ApiResponse::success(
        "Room retrieved successfully",
        room,
    )))
}

/// Handler for creating a new room
///
/// This function handles POST requests to `/rooms`. Both `name` and
/// `capacity` are required.
#[instrument(skip(pool, payload))]
pub async fn create_room_handler(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<RoomBodyDto>,
) -> Result<(StatusCode, Json<ApiResponse<Room>>), ApiError> {
    let (name, capacity) = validate_room_body(payload.name, payload.capacity)?;

    let room = repo::create_room(&pool, NewRoom::new(name, capacity, payload.description))
        .map_err(|e| ApiError::internal(e, "Unable to create room"))?;

    info!("Successfully created room with id: {}", room.get_id());

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Room created successfully", room)),
    ))
}

/// Handler for updating a room
///
/// This function handles PUT requests to `/rooms/{id}`. This is a full
/// overwrite: an omitted description is not preserved from the prior
/// record.
#[instrument(skip(pool, payload), fields(room_id = %raw_id))]
pub async fn update_room_handler(
    State(pool): State<Arc<DbPool>>,
    Path(raw_id): Path<String>,
    Json(payload): Json<RoomBodyDto>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    let room_id = parse_int_param(&raw_id, "Invalid room id")?;

    let (name, capacity) = validate_room_body(payload.name, payload.capacity)?;

    let room = repo::update_room(
        &pool,
        room_id,
        RoomChanges::new(name, capacity, payload.description),
    )
    .map_err(|e| match e {
        RepoError::NotFound => ApiError::NotFound("Room"),
        other => ApiError::internal(other, "Unable to update room"),
    })?;

    info!("Successfully updated room with id: {}", room_id);

    Ok(Json(ApiResponse::success(
        "Room updated successfully",
        room,
    )))
}

/// Handler for deleting a room
///
/// This function handles DELETE requests to `/rooms/{id}` and returns the
/// deleted record's prior state.
#[instrument(skip(pool), fields(room_id = %raw_id))]
pub async fn delete_room_handler(
    State(pool): State<Arc<DbPool>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    let room_id = parse_int_param(&raw_id, "Invalid room id")?;

    let room = repo::delete_room(&pool, room_id).map_err(|e| match e {
        RepoError::NotFound => ApiError::NotFound("Room"),
        other => ApiError::internal(other, "Unable to delete room"),
    })?;

    info!("Successfully deleted room with id: {}", room_id);

    Ok(Json(ApiResponse::success(
        "Room deleted successfully",
        room,
    )))
}

/// Checks the required room fields, returning them unwrapped
fn validate_room_body(
    name: Option<String>,
    capacity: Option<i32>,
) -> Result<(String, i32), ApiError> {
    match (name.filter(|n| !n.is_empty()), capacity) {
        (Some(name), Some(capacity)) => Ok((name, capacity)),
        _ => Err(ApiError::InvalidBody("name and capacity are required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::tests::setup_test_db;

    fn body(name: Option<&str>, capacity: Option<i32>) -> RoomBodyDto {
        RoomBodyDto {
            name: name.map(String::from),
            capacity,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_room_handler() {
        let pool = setup_test_db();

        let (status, response) =
            create_room_handler(State(pool.clone()), Json(body(Some("Boardroom"), Some(12))))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);

        let room = response.0.data.unwrap();
        assert_eq!(room.get_name(), "Boardroom");
        assert_eq!(room.get_capacity(), 12);
    }

    #[tokio::test]
    async fn test_create_room_handler_missing_fields() {
        let pool = setup_test_db();

        let missing_capacity =
            create_room_handler(State(pool.clone()), Json(body(Some("Boardroom"), None))).await;
        assert!(matches!(missing_capacity, Err(ApiError::InvalidBody(_))));

        let missing_name =
            create_room_handler(State(pool.clone()), Json(body(None, Some(12)))).await;
        assert!(matches!(missing_name, Err(ApiError::InvalidBody(_))));

        assert!(repo::list_rooms(&pool).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_room_handler_invalid_id() {
        let pool = setup_test_db();

        let result = get_room_handler(State(pool.clone()), Path("q".to_string())).await;

        assert!(matches!(
            result,
            Err(ApiError::InvalidId("Invalid room id"))
        ));
    }

    #[tokio::test]
    async fn test_get_room_handler_not_found() {
        let pool = setup_test_db();

        let result = get_room_handler(State(pool.clone()), Path("9999".to_string())).await;

        assert!(matches!(result, Err(ApiError::NotFound("Room"))));
    }

    #[tokio::test]
    async fn test_get_rooms_by_capacity_handler() {
        let pool = setup_test_db();

        repo::create_room(&pool, NewRoom::new("Single".to_string(), 1, None)).unwrap();
        repo::create_room(&pool, NewRoom::new("Double".to_string(), 2, None)).unwrap();

        let response =
            get_rooms_by_capacity_handler(State(pool.clone()), Path("2".to_string()))
                .await
                .unwrap();

        let rooms = response.0.data.unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].get_name(), "Double");
    }

    #[tokio::test]
    async fn test_get_rooms_by_capacity_handler_invalid() {
        let pool = setup_test_db();

        let result =
            get_rooms_by_capacity_handler(State(pool.clone()), Path("large".to_string())).await;

        assert!(matches!(
            result,
            Err(ApiError::InvalidId("Invalid capacity"))
        ));
    }

    #[tokio::test]
    async fn test_get_rooms_by_capacity_range_handler_inclusive() {
        let pool = setup_test_db();

        for capacity in 0..=6 {
            repo::create_room(
                &pool,
                NewRoom::new(format!("Room {}", capacity), capacity, None),
            )
            .unwrap();
        }

        let response = get_rooms_by_capacity_range_handler(
            State(pool.clone()),
            Path(("1".to_string(), "5".to_string())),
        )
        .await
        .unwrap();

        let rooms = response.0.data.unwrap();
        assert_eq!(rooms.len(), 5);
        assert!(rooms.iter().all(|r| (1..=5).contains(&r.get_capacity())));
    }

    #[tokio::test]
    async fn test_get_rooms_by_capacity_range_handler_invalid_bounds() {
        let pool = setup_test_db();

        let result = get_rooms_by_capacity_range_handler(
            State(pool.clone()),
            Path(("1".to_string(), "five".to_string())),
        )
        .await;

        assert!(matches!(
            result,
            Err(ApiError::InvalidId("Invalid capacity"))
        ));
    }

    #[tokio::test]
    async fn test_update_room_handler_full_overwrite() {
        let pool = setup_test_db();

        let created = repo::create_room(
            &pool,
            NewRoom::new("Boardroom".to_string(), 12, Some("Top floor".to_string())),
        )
        .unwrap();

        let response = update_room_handler(
            State(pool.clone()),
            Path(created.get_id().to_string()),
            Json(body(Some("War Room"), Some(8))),
        )
        .await
        .unwrap();

        let updated = response.0.data.unwrap();
        assert_eq!(updated.get_name(), "War Room");
        assert_eq!(updated.get_capacity(), 8);
        // Description omitted from the body is not preserved
        assert_eq!(updated.get_description(), None);
    }

    #[tokio::test]
    async fn test_update_room_handler_not_found() {
        let pool = setup_test_db();

        let result = update_room_handler(
            State(pool.clone()),
            Path("9999".to_string()),
            Json(body(Some("Ghost"), Some(1))),
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound("Room"))));
    }

    #[tokio::test]
    async fn test_delete_room_handler() {
        let pool = setup_test_db();

        let created = repo::create_room(&pool, NewRoom::new("Studio".to_string(), 2, None)).unwrap();

        let response = delete_room_handler(State(pool.clone()), Path(created.get_id().to_string()))
            .await
            .unwrap();

        assert_eq!(response.0.data.unwrap(), created);

        let second =
            delete_room_handler(State(pool.clone()), Path(created.get_id().to_string())).await;
        assert!(matches!(second, Err(ApiError::NotFound("Room"))));
    }
}
