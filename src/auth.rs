//! Identity and session boundary.
//!
//! Login resolves `(email, password)` against the users snapshot;
//! registration creates a user with a fresh invite code and establishes the
//! session. The session itself is one more store key holding the current
//! user, refreshed from the users snapshot on read so relation changes made
//! since login are picked up (and a stale copy is rewritten).

use crate::errors::AppError;
use crate::id::generate_entity_id;
use crate::models::User;
use crate::repository::Repository;
use crate::social::unique_invite_code;
use crate::store::Store;

impl<S: Store> Repository<S> {
    /// Registers a new user and logs them in.
    ///
    /// Fails with [`AppError::DuplicateEmail`] when the email already has an
    /// account. Field-level input checks (non-empty name, password length,
    /// confirmation) belong to the presentation layer; see
    /// [`crate::validators::validate_registration`].
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.update_users(|users| {
            if users.iter().any(|user| user.email == email) {
                return Err(AppError::DuplicateEmail {
                    email: email.to_string(),
                });
            }
            let id = generate_entity_id();
            let user = User {
                avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={id}"),
                id,
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                invite_code: unique_invite_code(users),
                following: Vec::new(),
                followers: Vec::new(),
                friends: Vec::new(),
            };
            users.push(user.clone());
            Ok(user)
        })?;
        self.set_session_user(&user)?;
        log::debug!("registered user {} ({})", user.name, user.id);
        Ok(user)
    }

    /// Resolves credentials by exact match. A miss is a value
    /// ([`AppError::NotFound`]), never a panic.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let users = self.load_users()?;
        let user = users
            .into_iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or_else(|| AppError::not_found("no account matches that email and password"))?;
        self.set_session_user(&user)?;
        log::debug!("user {} logged in", user.id);
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), AppError> {
        self.clear_session()
    }

    /// Returns the current session user, if any, refreshed from the users
    /// snapshot. A session pointing at a user that no longer exists in the
    /// snapshot is returned as stored (it may be a registration the snapshot
    /// has not caught up with).
    pub fn current_user(&mut self) -> Result<Option<User>, AppError> {
        let Some(stored) = self.session_user()? else {
            return Ok(None);
        };
        let users = self.load_users()?;
        match users.into_iter().find(|user| user.id == stored.id) {
            Some(latest) => {
                if latest != stored {
                    self.set_session_user(&latest)?;
                }
                Ok(Some(latest))
            }
            None => Ok(Some(stored)),
        }
    }
}
