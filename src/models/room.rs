use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a room in the system
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::rooms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Room {
    /// Unique identifier for the room, assigned by the database
    id: i32,

    /// The room's name
    name: String,

    /// How many people the room holds
    capacity: i32,

    /// Free-form description of the room
    description: Option<String>,
}

impl Room {
    /// Gets the room's ID
    pub fn get_id(&self) -> i32 {
        self.id
    }

    /// Gets the room's name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the room's capacity
    pub fn get_capacity(&self) -> i32 {
        self.capacity
    }

    /// Gets the room's description
    pub fn get_description(&self) -> Option<String> {
        self.description.clone()
    }
}

/// Insertable form of a room, without the database-assigned ID
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::rooms)]
pub struct NewRoom {
    name: String,
    capacity: i32,
    description: Option<String>,
}

impl NewRoom {
    /// Creates a new insertable room
    pub fn new(name: String, capacity: i32, description: Option<String>) -> Self {
        Self { name, capacity, description }
    }
}

/// Full-record changeset for a room
///
/// Every column is rewritten on update: an omitted description becomes
/// NULL instead of keeping its previous value.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::rooms)]
#[diesel(treat_none_as_null = true)]
pub struct RoomChanges {
    name: String,
    capacity: i32,
    description: Option<String>,
}

impl RoomChanges {
    /// Creates a changeset overwriting all room fields
    pub fn new(name: String, capacity: i32, description: Option<String>) -> Self {
        Self { name, capacity, description }
    }
}
