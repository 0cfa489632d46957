//! Plateful core library.
//!
//! The domain core of a restaurant review application: users, restaurants and
//! visibility-scoped reviews persisted as whole-collection JSON snapshots in a
//! synchronous key-value [`store::Store`]. The social graph (directed follows,
//! derived friendships, invite-code linking) gates which reviews a viewer may
//! see. Rendering, routing and input collection belong to a presentation layer
//! (see the `plateful` CLI binary); the core only returns structured results.

pub mod auth;
pub mod errors;
pub mod favorites;
pub mod id;
pub mod keys;
pub mod models;
pub mod repository;
pub mod restaurants;
pub mod search;
pub mod seed;
pub mod social;
pub mod store;
pub mod validators;

pub use errors::*;
pub use models::{PriceRange, Restaurant, Review, User, Visibility};
pub use repository::Repository;
pub use restaurants::{AuthoredReview, NewRestaurant, ReviewDraft, visible_reviews};
pub use search::{RestaurantFilter, filter_restaurants};
pub use social::{can_view, is_friend};
pub use store::{JsonFileStore, MemoryStore, Store};
