use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a user account in the system
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    /// Unique identifier for the user, assigned by the database
    id: i32,

    /// The user's display name
    name: String,

    /// The user's email address, unique when present
    email: Option<String>,

    /// Argon2id hash of the user's password (PHC string format)
    password: Option<String>,

    /// The user's telephone number
    tel: Option<String>,

    /// The user's role, defaults to "user"
    role: String,
}

impl User {
    /// Gets the user's ID
    pub fn get_id(&self) -> i32 {
        self.id
    }

    /// Gets the user's name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the user's email address
    pub fn get_email(&self) -> Option<String> {
        self.email.clone()
    }

    /// Gets the stored password hash
    pub fn get_password(&self) -> Option<String> {
        self.password.clone()
    }

    /// Gets the user's telephone number
    pub fn get_tel(&self) -> Option<String> {
        self.tel.clone()
    }

    /// Gets the user's role
    pub fn get_role(&self) -> String {
        self.role.clone()
    }
}

/// Insertable form of a user, without the database-assigned ID
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    name: String,
    email: Option<String>,
    password: Option<String>,
    tel: Option<String>,
    role: String,
}

impl NewUser {
    /// Creates a new insertable user
    ///
    /// ### Arguments
    ///
    /// * `name` - The display name for the new user
    /// * `email` - The email address, if provided
    /// * `password` - The already-hashed password, if provided
    /// * `tel` - The telephone number, if provided
    /// * `role` - The role, defaulting to `"user"` when absent
    pub fn new(
        name: String,
        email: Option<String>,
        password: Option<String>,
        tel: Option<String>,
        role: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            password,
            tel,
            role: role.unwrap_or_else(|| "user".to_string()),
        }
    }
}

/// Full-record changeset for a user
///
/// Every column is rewritten on update: optional fields left out of the
/// request become NULL instead of keeping their previous value.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(treat_none_as_null = true)]
pub struct UserChanges {
    name: String,
    email: Option<String>,
    password: Option<String>,
    tel: Option<String>,
    role: String,
}

impl UserChanges {
    /// Creates a changeset overwriting all user fields
    pub fn new(
        name: String,
        email: Option<String>,
        password: Option<String>,
        tel: Option<String>,
        role: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            password,
            tel,
            role: role.unwrap_or_else(|| "user".to_string()),
        }
    }
}
