//! Storage keys for the snapshot store.
//!
//! The whole dataset lives under four keys: the users snapshot, the
//! restaurants snapshot, the current-session user, and one favorites list
//! per user id.

/// Key holding the serialized `Vec<User>` snapshot.
pub const USERS: &str = "users";

/// Key holding the serialized `Vec<Restaurant>` snapshot.
pub const RESTAURANTS: &str = "restaurants";

/// Key holding the current session user, if any.
pub const SESSION: &str = "currentUser";

/// Key holding the favorites id list for one user.
pub fn favorites(user_id: &str) -> String {
    format!("favorites_{user_id}")
}
