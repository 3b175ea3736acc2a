/// Data models module
///
/// This module contains the data structures stored in the database:
/// users and rooms, along with their insertable and changeset forms.

mod room;
mod user;

pub use room::*;
pub use user::*;
