//! Restaurant browsing: cuisine filter and free-text search.

use crate::models::Restaurant;

/// Browse criteria. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct RestaurantFilter {
    /// Exact cuisine tag, e.g. "川菜".
    pub cuisine: Option<String>,
    /// Case-insensitive substring matched against name, description, cuisine
    /// and address.
    pub query: Option<String>,
}

impl RestaurantFilter {
    pub fn by_cuisine(cuisine: impl Into<String>) -> Self {
        Self {
            cuisine: Some(cuisine.into()),
            ..Self::default()
        }
    }

    pub fn by_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(cuisine) = &self.cuisine
            && &restaurant.cuisine != cuisine
        {
            return false;
        }
        if let Some(query) = &self.query {
            let needle = query.trim().to_lowercase();
            if !needle.is_empty() {
                let haystacks = [
                    &restaurant.name,
                    &restaurant.description,
                    &restaurant.cuisine,
                    &restaurant.address,
                ];
                return haystacks.iter().any(|text| text.to_lowercase().contains(&needle));
            }
        }
        true
    }
}

/// Applies the cuisine filter first, then the search query, preserving order.
pub fn filter_restaurants<'a>(restaurants: &'a [Restaurant], filter: &RestaurantFilter) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| filter.matches(restaurant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_restaurants;

    #[test]
    fn empty_filter_matches_all() {
        let restaurants = default_restaurants();
        let hits = filter_restaurants(&restaurants, &RestaurantFilter::default());
        assert_eq!(hits.len(), restaurants.len());
    }

    #[test]
    fn cuisine_filter_is_exact() {
        let restaurants = default_restaurants();
        let hits = filter_restaurants(&restaurants, &RestaurantFilter::by_cuisine("川菜"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "老王川菜馆");
    }

    #[test]
    fn query_searches_name_description_cuisine_and_address() {
        let restaurants = default_restaurants();
        let by_address = filter_restaurants(&restaurants, &RestaurantFilter::by_query("中关村"));
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].id, "2");

        let by_description = filter_restaurants(&restaurants, &RestaurantFilter::by_query("点心"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "3");

        let none = filter_restaurants(&restaurants, &RestaurantFilter::by_query("pizza"));
        assert!(none.is_empty());
    }

    #[test]
    fn cuisine_and_query_combine() {
        let restaurants = default_restaurants();
        let filter = RestaurantFilter {
            cuisine: Some("粤菜".to_string()),
            query: Some("早茶".to_string()),
        };
        assert_eq!(filter_restaurants(&restaurants, &filter).len(), 1);
    }
}
