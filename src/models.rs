//! Domain model: users, restaurants, reviews.
//!
//! Wire names are camelCase so snapshots round-trip field-for-field with the
//! JSON format the original dataset used.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user and their slice of the social graph.
///
/// `following`, `followers` and `friends` hold user ids, treated as sets.
/// `friends ⊆ following` and `friends ⊆ followers` hold after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub invite_code: String,
    #[serde(default)]
    pub following: Vec<String>,
    #[serde(default)]
    pub followers: Vec<String>,
    #[serde(default)]
    pub friends: Vec<String>,
}

/// Ordinal price tier, rendered as `¥` / `¥¥` / `¥¥¥`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "¥")]
    Budget,
    #[serde(rename = "¥¥")]
    Moderate,
    #[serde(rename = "¥¥¥")]
    Premium,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = match self {
            PriceRange::Budget => "¥",
            PriceRange::Moderate => "¥¥",
            PriceRange::Premium => "¥¥¥",
        };
        f.write_str(glyphs)
    }
}

impl FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "¥" | "1" | "budget" => Ok(PriceRange::Budget),
            "¥¥" | "2" | "moderate" => Ok(PriceRange::Moderate),
            "¥¥¥" | "3" | "premium" => Ok(PriceRange::Premium),
            other => Err(format!("unknown price range '{other}' (expected ¥, ¥¥ or ¥¥¥)")),
        }
    }
}

/// Who may see a review.
///
/// `Public` is a legacy tag found on old seed data only. Reads treat it
/// exactly like `Friends`; write paths reject it; storage round-trips it
/// unchanged. A stored tag this build does not recognize parses as
/// `Unknown` and grants no access, so one bad tag costs one hidden review
/// rather than the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Friends,
    Private,
    /// Unrecognized stored tag. Never written by this build.
    #[serde(other)]
    Unknown,
}

impl Visibility {
    /// `true` for the tags that grant access to the author's friends
    /// (`Friends`, plus the legacy `Public` alias).
    pub fn friend_scoped(self) -> bool {
        matches!(self, Visibility::Friends | Visibility::Public)
    }

    /// `true` only for the legacy read-only tag.
    pub fn is_legacy(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Visibility::Public => "public",
            Visibility::Friends => "friends",
            Visibility::Private => "private",
            Visibility::Unknown => "unknown",
        };
        f.write_str(tag)
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "friends" => Ok(Visibility::Friends),
            "private" => Ok(Visibility::Private),
            other => Err(format!("unknown visibility '{other}' (expected friends or private)")),
        }
    }
}

/// A review, owned by its restaurant. `user_name` is a denormalized snapshot
/// of the author's display name at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
    pub date: NaiveDate,
    pub visibility: Visibility,
}

/// A restaurant and its reviews (composition: deleting the restaurant
/// removes them). `rating` is derived, never independently settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub rating: f64,
    pub price_range: PriceRange,
    pub cuisine: String,
    pub image_url: String,
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl Restaurant {
    /// Recomputes the derived rating: mean of review ratings rounded to one
    /// decimal (half away from zero), or 0 with no reviews.
    pub fn recompute_rating(&mut self) {
        if self.reviews.is_empty() {
            self.rating = 0.0;
            return;
        }
        let total: f64 = self.reviews.iter().map(|review| review.rating).sum();
        self.rating = (total / self.reviews.len() as f64 * 10.0).round() / 10.0;
    }
}
