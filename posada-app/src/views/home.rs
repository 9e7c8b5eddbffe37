//! Hotel listing with filter and sort
//!
//! The filtering pipeline is a pure selector over (hotels, filters) so
//! it can be tested without a view or a backend: exact-match city
//! filter, substring search on name-or-city, then a price sort. All
//! matching is case-insensitive.

use posada_client::HttpClient;
use shared::models::Hotel;
use tokio_util::sync::CancellationToken;

use crate::notify::Notifier;
use crate::routes::Route;

/// Price sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceOrder {
    #[default]
    Ascending,
    Descending,
}

/// Listing filter state
#[derive(Debug, Clone, Default)]
pub struct HotelFilters {
    /// Substring match against hotel name or city; empty matches all
    pub search_term: String,
    /// Exact city match; empty matches all
    pub city_filter: String,
    pub price_order: PriceOrder,
}

/// Pure derived selector: (hotels, filters) -> visible hotels
pub fn filter_hotels(hotels: &[Hotel], filters: &HotelFilters) -> Vec<Hotel> {
    let city = filters.city_filter.to_lowercase();
    let term = filters.search_term.to_lowercase();

    let mut filtered: Vec<Hotel> = hotels
        .iter()
        .filter(|hotel| city.is_empty() || hotel.city.to_lowercase() == city)
        .filter(|hotel| {
            term.is_empty()
                || hotel.name.to_lowercase().contains(&term)
                || hotel.city.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    // Stable sort keeps arrival order for equal prices.
    match filters.price_order {
        PriceOrder::Ascending => filtered.sort_by_key(|hotel| hotel.best_price),
        PriceOrder::Descending => filtered.sort_by_key(|hotel| std::cmp::Reverse(hotel.best_price)),
    }

    filtered
}

/// Distinct cities in first-seen order, for the filter dropdown
pub fn cities(hotels: &[Hotel]) -> Vec<String> {
    let mut seen = Vec::new();
    for hotel in hotels {
        if !seen.iter().any(|c: &String| c == &hotel.city) {
            seen.push(hotel.city.clone());
        }
    }
    seen
}

/// Home screen: the hotel catalog plus the filter controls
#[derive(Debug, Default)]
pub struct HomeView {
    hotels: Vec<Hotel>,
    pub filters: HotelFilters,
    loading: bool,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog; abandoned silently if the view is torn down
    pub async fn load(&mut self, client: &HttpClient) {
        self.loading = true;
        let result = tokio::select! {
            _ = self.cancel.cancelled() => {
                self.loading = false;
                return;
            }
            result = client.list_hotels() => result,
        };
        self.loading = false;

        match result {
            Ok(hotels) => self.hotels = hotels,
            Err(err) => {
                tracing::error!(error = %err, "failed to load hotels");
                self.notifier.error(err.user_message());
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.search_term = term.into();
    }

    pub fn set_city_filter(&mut self, city: impl Into<String>) {
        self.filters.city_filter = city.into();
    }

    pub fn set_price_order(&mut self, order: PriceOrder) {
        self.filters.price_order = order;
    }

    /// Hotels after filter and sort
    pub fn visible_hotels(&self) -> Vec<Hotel> {
        filter_hotels(&self.hotels, &self.filters)
    }

    /// Options for the city dropdown
    pub fn city_options(&self) -> Vec<String> {
        cities(&self.hotels)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Navigate to a hotel's detail page
    pub fn open_details(&self, hotel_id: &str) -> Route {
        Route::HotelDetail(hotel_id.to_string())
    }

    /// Token a host cancels when the view is torn down
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(name: &str, city: &str, best_price: i64) -> Hotel {
        Hotel {
            id: name.to_string(),
            name: name.to_string(),
            description: String::new(),
            photo: String::new(),
            country: "Peru".to_string(),
            city: city.to_string(),
            address: String::new(),
            ranking: 3,
            best_price,
        }
    }

    #[test]
    fn city_filter_and_ascending_price_sort() {
        let hotels = vec![
            hotel("a", "Lima", 50),
            hotel("b", "Lima", 30),
            hotel("c", "Cusco", 40),
        ];
        let filters = HotelFilters {
            city_filter: "Lima".to_string(),
            ..Default::default()
        };

        let result = filter_hotels(&hotels, &filters);
        let prices: Vec<i64> = result.iter().map(|h| h.best_price).collect();
        assert_eq!(prices, vec![30, 50]);
        assert!(result.iter().all(|h| h.city == "Lima"));
    }

    #[test]
    fn city_filter_is_case_insensitive() {
        let hotels = vec![hotel("a", "Lima", 50), hotel("c", "Cusco", 40)];
        let filters = HotelFilters {
            city_filter: "lima".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_hotels(&hotels, &filters).len(), 1);
    }

    #[test]
    fn search_matches_name_or_city() {
        let hotels = vec![
            hotel("Hotel Sol", "Lima", 50),
            hotel("Luna", "Solana", 30),
            hotel("Estrella", "Cusco", 40),
        ];
        let filters = HotelFilters {
            search_term: "sol".to_string(),
            ..Default::default()
        };
        let result = filter_hotels(&hotels, &filters);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn descending_price_order() {
        let hotels = vec![
            hotel("a", "Lima", 50),
            hotel("b", "Lima", 30),
            hotel("c", "Cusco", 40),
        ];
        let filters = HotelFilters {
            price_order: PriceOrder::Descending,
            ..Default::default()
        };
        let prices: Vec<i64> = filter_hotels(&hotels, &filters)
            .iter()
            .map(|h| h.best_price)
            .collect();
        assert_eq!(prices, vec![50, 40, 30]);
    }

    #[test]
    fn cities_are_distinct_in_first_seen_order() {
        let hotels = vec![
            hotel("a", "Lima", 50),
            hotel("b", "Cusco", 30),
            hotel("c", "Lima", 40),
        ];
        assert_eq!(cities(&hotels), vec!["Lima", "Cusco"]);
    }
}
