use crate::db::DbPool;
use crate::models::{NewRoom, Room, RoomChanges};
use crate::repo::RepoError;
use crate::schema::rooms;
use diesel::prelude::*;

/// Lists all rooms in the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
///
/// ### Returns
///
/// A Result containing a vector of all Rooms in the database
pub fn list_rooms(pool: &DbPool) -> Result<Vec<Room>, RepoError> {
    let conn = &mut pool.get()?;

    let result = rooms::table
        .select(Room::as_select())
        .load::<Room>(conn)?;

    Ok(result)
}

/// Retrieves a room from the database by its ID
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `room_id` - The ID of the room to retrieve
///
/// ### Returns
///
/// A Result containing the Room if found, or None if no room has that ID
pub fn get_room(pool: &DbPool, room_id: i32) -> Result<Option<Room>, RepoError> {
    let conn = &mut pool.get()?;

    let result = rooms::table
        .find(room_id)
        .select(Room::as_select())
        .first::<Room>(conn)
        .optional()?;

    Ok(result)
}

/// Lists rooms with exactly the given capacity
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `capacity` - The exact capacity to match
///
/// ### Returns
///
/// A Result containing the matching Rooms, possibly empty
pub fn get_rooms_by_capacity(pool: &DbPool, capacity: i32) -> Result<Vec<Room>, RepoError> {
    let conn = &mut pool.get()?;

    let result = rooms::table
        .filter(rooms::capacity.eq(capacity))
        .select(Room::as_select())
        .load::<Room>(conn)?;

    Ok(result)
}

/// Lists rooms with capacity in the inclusive range [min, max]
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `min` - The lower capacity bound, inclusive
/// * `max` - The upper capacity bound, inclusive
///
/// ### Returns
///
/// A Result containing the matching Rooms, possibly empty
pub fn get_rooms_by_capacity_range(
    pool: &DbPool,
    min: i32,
    max: i32,
) -> Result<Vec<Room>, RepoError> {
    let conn = &mut pool.get()?;

    let result = rooms::table
        .filter(rooms::capacity.between(min, max))
        .select(Room::as_select())
        .load::<Room>(conn)?;

    Ok(result)
}

/// Creates a new room in the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `new_room` - The room to insert
///
/// ### Returns
///
/// A Result containing the newly created Room with its assigned ID
pub fn create_room(pool: &DbPool, new_room: NewRoom) -> Result<Room, RepoError> {
    let conn = &mut pool.get()?;

    let room = diesel::insert_into(rooms::table)
        .values(&new_room)
        .returning(Room::as_returning())
        .get_result(conn)?;

    Ok(room)
}

/// Overwrites a room record by its ID
///
/// This is a full-record update: every column is rewritten from the
/// changeset, so an omitted description becomes NULL.
///
/// ### Errors
///
/// Returns `RepoError::NotFound` if no room has that ID
pub fn update_room(pool: &DbPool, room_id: i32, changes: RoomChanges) -> Result<Room, RepoError> {
    let conn = &mut pool.get()?;

    let room = diesel::update(rooms::table.find(room_id))
        .set(&changes)
        .returning(Room::as_returning())
        .get_result(conn)?;

    Ok(room)
}

/// Deletes a room by its ID
///
/// ### Returns
///
/// A Result containing the deleted Room's prior state
///
/// ### Errors
///
/// Returns `RepoError::NotFound` if no room has that ID
pub fn delete_room(pool: &DbPool, room_id: i32) -> Result<Room, RepoError> {
    let conn = &mut pool.get()?;

    let room = diesel::delete(rooms::table.find(room_id))
        .returning(Room::as_returning())
        .get_result(conn)?;

    Ok(room)
}
