//! Per-user favorites: a plain restaurant-id list under its own store key.

use crate::errors::AppError;
use crate::models::Restaurant;
use crate::repository::Repository;
use crate::store::Store;

impl<S: Store> Repository<S> {
    /// The raw favorites id list for a user (empty when never written).
    pub fn favorites(&mut self, user_id: &str) -> Result<Vec<String>, AppError> {
        self.load_favorites(user_id)
    }

    /// Adds a restaurant to the favorites list. Returns `false` when it was
    /// already there.
    pub fn add_favorite(&mut self, user_id: &str, restaurant_id: &str) -> Result<bool, AppError> {
        // Favoriting an unknown restaurant would strand a dangling id.
        self.restaurant(restaurant_id)?;
        let mut favorite_ids = self.load_favorites(user_id)?;
        if favorite_ids.iter().any(|id| id == restaurant_id) {
            return Ok(false);
        }
        favorite_ids.push(restaurant_id.to_string());
        self.save_favorites(user_id, &favorite_ids)?;
        Ok(true)
    }

    /// Removes a restaurant from the favorites list. Returns `false` when it
    /// was not there.
    pub fn remove_favorite(&mut self, user_id: &str, restaurant_id: &str) -> Result<bool, AppError> {
        let mut favorite_ids = self.load_favorites(user_id)?;
        let before = favorite_ids.len();
        favorite_ids.retain(|id| id != restaurant_id);
        if favorite_ids.len() == before {
            return Ok(false);
        }
        self.save_favorites(user_id, &favorite_ids)?;
        Ok(true)
    }

    /// Flips the favorite state; returns `true` when the restaurant is now a
    /// favorite.
    pub fn toggle_favorite(&mut self, user_id: &str, restaurant_id: &str) -> Result<bool, AppError> {
        if self.remove_favorite(user_id, restaurant_id)? {
            Ok(false)
        } else {
            self.add_favorite(user_id, restaurant_id)?;
            Ok(true)
        }
    }

    /// Resolves the favorites list to restaurant records, skipping ids whose
    /// restaurant has since been deleted.
    pub fn favorite_restaurants(&mut self, user_id: &str) -> Result<Vec<Restaurant>, AppError> {
        let favorite_ids = self.load_favorites(user_id)?;
        let restaurants = self.load_restaurants()?;
        Ok(restaurants
            .into_iter()
            .filter(|restaurant| favorite_ids.iter().any(|id| id == &restaurant.id))
            .collect())
    }
}
