//! Restaurant and review lifecycle.
//!
//! Restaurants are created by an authenticated user (who becomes the owner)
//! and deleted only by that owner; their reviews go with them. Reviews are
//! edited and deleted only by their author, and every review mutation
//! recomputes the restaurant's derived rating.

use chrono::Utc;

use crate::errors::AppError;
use crate::id::generate_entity_id;
use crate::models::{PriceRange, Restaurant, Review, User, Visibility};
use crate::repository::Repository;
use crate::seed::DEFAULT_RESTAURANT_IMAGE;
use crate::social::can_view;
use crate::store::Store;

/// Input for creating a restaurant.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub address: String,
    pub cuisine: String,
    pub price_range: PriceRange,
    /// Falls back to a stock image when absent.
    pub image_url: Option<String>,
}

/// Input for creating or editing a review. Ratings are whole stars, 1 to 5.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
    pub visibility: Visibility,
}

impl ReviewDraft {
    /// Rejects out-of-range ratings and the legacy write-forbidden `public`
    /// tag. New reviews carry `friends` or `private` only.
    fn check(&self) -> Result<(), AppError> {
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::invalid("rating must be between 1 and 5 stars"));
        }
        if self.visibility.is_legacy() {
            return Err(AppError::invalid(
                "the 'public' visibility tag is a read-only legacy value; use 'friends' or 'private'",
            ));
        }
        if !matches!(self.visibility, Visibility::Friends | Visibility::Private) {
            return Err(AppError::invalid("visibility must be 'friends' or 'private'"));
        }
        Ok(())
    }
}

/// A review paired with the restaurant it was written for.
#[derive(Debug, Clone)]
pub struct AuthoredReview {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub review: Review,
}

/// Filters a restaurant's reviews down to what `viewer` may see. Anonymous
/// viewers see nothing.
pub fn visible_reviews<'a>(viewer: Option<&User>, restaurant: &'a Restaurant) -> Vec<&'a Review> {
    let Some(viewer) = viewer else {
        return Vec::new();
    };
    restaurant
        .reviews
        .iter()
        .filter(|review| can_view(viewer, &review.user_id, review.visibility))
        .collect()
}

fn restaurant_position(restaurants: &[Restaurant], restaurant_id: &str) -> Result<usize, AppError> {
    restaurants
        .iter()
        .position(|restaurant| restaurant.id == restaurant_id)
        .ok_or_else(|| AppError::not_found(format!("restaurant {restaurant_id}")))
}

impl<S: Store> Repository<S> {
    pub fn list_restaurants(&mut self) -> Result<Vec<Restaurant>, AppError> {
        self.load_restaurants()
    }

    pub fn restaurant(&mut self, restaurant_id: &str) -> Result<Restaurant, AppError> {
        let restaurants = self.load_restaurants()?;
        restaurants
            .into_iter()
            .find(|restaurant| restaurant.id == restaurant_id)
            .ok_or_else(|| AppError::not_found(format!("restaurant {restaurant_id}")))
    }

    /// Creates a restaurant owned by `owner_id`. The rating starts at 0 with
    /// no reviews.
    pub fn add_restaurant(&mut self, owner_id: &str, draft: NewRestaurant) -> Result<Restaurant, AppError> {
        self.update_restaurants(|restaurants| {
            let restaurant = Restaurant {
                id: generate_entity_id(),
                name: draft.name,
                description: draft.description,
                address: draft.address,
                rating: 0.0,
                price_range: draft.price_range,
                cuisine: draft.cuisine,
                image_url: draft
                    .image_url
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_RESTAURANT_IMAGE.to_string()),
                reviews: Vec::new(),
                owner_id: Some(owner_id.to_string()),
            };
            restaurants.push(restaurant.clone());
            Ok(restaurant)
        })
    }

    /// Deletes a restaurant and, by composition, its reviews. Only the owner
    /// may delete; seed restaurants have no owner and cannot be deleted.
    pub fn delete_restaurant(&mut self, actor_id: &str, restaurant_id: &str) -> Result<(), AppError> {
        self.update_restaurants(|restaurants| {
            let idx = restaurant_position(restaurants, restaurant_id)?;
            if restaurants[idx].owner_id.as_deref() != Some(actor_id) {
                return Err(AppError::invalid("only the owner can delete a restaurant"));
            }
            restaurants.remove(idx);
            Ok(())
        })
    }

    /// Adds a review authored by `author` and recomputes the rating. The
    /// review date is today.
    pub fn add_review(
        &mut self,
        author: &User,
        restaurant_id: &str,
        draft: ReviewDraft,
    ) -> Result<Review, AppError> {
        draft.check()?;
        let author_id = author.id.clone();
        let author_name = author.name.clone();
        self.update_restaurants(move |restaurants| {
            let idx = restaurant_position(restaurants, restaurant_id)?;
            let review = Review {
                id: generate_entity_id(),
                user_id: author_id,
                user_name: author_name,
                rating: f64::from(draft.rating),
                comment: draft.comment,
                date: Utc::now().date_naive(),
                visibility: draft.visibility,
            };
            restaurants[idx].reviews.push(review.clone());
            restaurants[idx].recompute_rating();
            Ok(review)
        })
    }

    /// Replaces a review's rating, comment and visibility, stamps today's
    /// date, and recomputes the rating. Author-only.
    pub fn edit_review(
        &mut self,
        actor_id: &str,
        restaurant_id: &str,
        review_id: &str,
        draft: ReviewDraft,
    ) -> Result<Review, AppError> {
        draft.check()?;
        self.update_restaurants(|restaurants| {
            let idx = restaurant_position(restaurants, restaurant_id)?;
            let restaurant = &mut restaurants[idx];
            let review = restaurant
                .reviews
                .iter_mut()
                .find(|review| review.id == review_id)
                .ok_or_else(|| AppError::not_found(format!("review {review_id}")))?;
            if review.user_id != actor_id {
                return Err(AppError::invalid("only the author can edit a review"));
            }
            review.rating = f64::from(draft.rating);
            review.comment = draft.comment;
            review.visibility = draft.visibility;
            review.date = Utc::now().date_naive();
            let updated = review.clone();
            restaurant.recompute_rating();
            Ok(updated)
        })
    }

    /// Removes a review and recomputes the rating (back to 0 when it was the
    /// last one). Author-only.
    pub fn delete_review(&mut self, actor_id: &str, restaurant_id: &str, review_id: &str) -> Result<(), AppError> {
        self.update_restaurants(|restaurants| {
            let idx = restaurant_position(restaurants, restaurant_id)?;
            let restaurant = &mut restaurants[idx];
            let review_idx = restaurant
                .reviews
                .iter()
                .position(|review| review.id == review_id)
                .ok_or_else(|| AppError::not_found(format!("review {review_id}")))?;
            if restaurant.reviews[review_idx].user_id != actor_id {
                return Err(AppError::invalid("only the author can delete a review"));
            }
            restaurant.reviews.remove(review_idx);
            restaurant.recompute_rating();
            Ok(())
        })
    }

    /// All reviews authored by `user_id`, across restaurants.
    pub fn my_reviews(&mut self, user_id: &str) -> Result<Vec<AuthoredReview>, AppError> {
        let restaurants = self.load_restaurants()?;
        let mut authored = Vec::new();
        for restaurant in &restaurants {
            for review in &restaurant.reviews {
                if review.user_id == user_id {
                    authored.push(AuthoredReview {
                        restaurant_id: restaurant.id.clone(),
                        restaurant_name: restaurant.name.clone(),
                        review: review.clone(),
                    });
                }
            }
        }
        Ok(authored)
    }

    /// Restaurants owned by `owner_id`.
    pub fn my_restaurants(&mut self, owner_id: &str) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = self.load_restaurants()?;
        Ok(restaurants
            .into_iter()
            .filter(|restaurant| restaurant.owner_id.as_deref() == Some(owner_id))
            .collect())
    }
}
