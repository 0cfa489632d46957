//! Snapshot repository over a [`Store`].
//!
//! Every collection is persisted as one JSON blob and read-modify-written as
//! a whole. All mutations funnel through [`Repository::update_users`] and
//! [`Repository::update_restaurants`], which load the snapshot, apply a
//! closure and save the result. That keeps a single auditable access point
//! instead of ambient shared state.
//!
//! A snapshot that fails to parse is recovered locally: the repository logs a
//! warning and falls back to the seed dataset. Parse failures never surface
//! to callers.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::keys;
use crate::models::{Restaurant, User};
use crate::seed;
use crate::store::Store;

pub struct Repository<S: Store> {
    store: S,
}

impl<S: Store> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn load_snapshot<T>(&mut self, key: &str, seed: fn() -> Vec<T>) -> Result<Vec<T>, AppError>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.store.get(key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(err) => {
                    log::warn!("snapshot '{key}' is corrupt ({err}); falling back to seed data");
                    Ok(seed())
                }
            },
            None => {
                let items = seed();
                self.save_snapshot(key, &items)?;
                Ok(items)
            }
        }
    }

    fn save_snapshot<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items).map_err(crate::errors::StoreError::from)?;
        self.store.set(key, &raw)?;
        Ok(())
    }

    /// Loads the users snapshot, seeding the store on first access.
    pub fn load_users(&mut self) -> Result<Vec<User>, AppError> {
        self.load_snapshot(keys::USERS, seed::default_users)
    }

    pub fn save_users(&mut self, users: &[User]) -> Result<(), AppError> {
        self.save_snapshot(keys::USERS, users)
    }

    /// Load-mutate-save cycle for the users snapshot. If the closure fails,
    /// nothing is persisted.
    pub fn update_users<R>(
        &mut self,
        mutate: impl FnOnce(&mut Vec<User>) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut users = self.load_users()?;
        let outcome = mutate(&mut users)?;
        self.save_users(&users)?;
        Ok(outcome)
    }

    /// Loads the restaurants snapshot, seeding the store on first access.
    pub fn load_restaurants(&mut self) -> Result<Vec<Restaurant>, AppError> {
        self.load_snapshot(keys::RESTAURANTS, seed::default_restaurants)
    }

    pub fn save_restaurants(&mut self, restaurants: &[Restaurant]) -> Result<(), AppError> {
        self.save_snapshot(keys::RESTAURANTS, restaurants)
    }

    /// Load-mutate-save cycle for the restaurants snapshot.
    pub fn update_restaurants<R>(
        &mut self,
        mutate: impl FnOnce(&mut Vec<Restaurant>) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut restaurants = self.load_restaurants()?;
        let outcome = mutate(&mut restaurants)?;
        self.save_restaurants(&restaurants)?;
        Ok(outcome)
    }

    /// Loads one user's favorites id list. Absent or corrupt lists read as empty.
    pub fn load_favorites(&mut self, user_id: &str) -> Result<Vec<String>, AppError> {
        let key = keys::favorites(user_id);
        match self.store.get(&key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(ids) => Ok(ids),
                Err(err) => {
                    log::warn!("favorites list for '{user_id}' is corrupt ({err}); treating as empty");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    pub fn save_favorites(&mut self, user_id: &str, favorite_ids: &[String]) -> Result<(), AppError> {
        let raw = serde_json::to_string(favorite_ids).map_err(crate::errors::StoreError::from)?;
        self.store.set(&keys::favorites(user_id), &raw)?;
        Ok(())
    }

    /// Reads the raw session user snapshot. A corrupt blob is cleared and
    /// reads as no session.
    pub fn session_user(&mut self) -> Result<Option<User>, AppError> {
        match self.store.get(keys::SESSION)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Ok(Some(user)),
                Err(err) => {
                    log::warn!("session snapshot is corrupt ({err}); clearing it");
                    self.store.remove(keys::SESSION)?;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn set_session_user(&mut self, user: &User) -> Result<(), AppError> {
        let raw = serde_json::to_string(user).map_err(crate::errors::StoreError::from)?;
        self.store.set(keys::SESSION, &raw)?;
        Ok(())
    }

    pub fn clear_session(&mut self) -> Result<(), AppError> {
        self.store.remove(keys::SESSION)?;
        Ok(())
    }
}
