use super::Engine;

use async_trait::async_trait;

use crate::{
    api::VenueSearchAPI,
    entities::{derive_cuisine, Coordinates, Venue},
    external::google_maps::{self, NearbyPlace},
};

/// Walkable distance from the search center, in meters.
const SEARCH_RADIUS_M: f64 = 800.0;

/// Cap on venues carried into fairness evaluation; bounds the size of the
/// batched duration request.
pub const MAX_VENUES: usize = 10;

#[async_trait]
impl VenueSearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_venues(
        &self,
        center: Coordinates,
        cuisines: &[String],
        min_price: u8,
        max_price: u8,
    ) -> Vec<Venue> {
        let keyword = if cuisines.is_empty() {
            "restaurant".to_string()
        } else {
            cuisines.join(" OR ")
        };

        let places = match google_maps::search_restaurants(
            center,
            SEARCH_RADIUS_M,
            &keyword,
            min_price,
            max_price,
        )
        .await
        {
            Ok(places) => places,
            Err(err) => {
                tracing::warn!("venue search failed: {:?}", err);
                return Vec::new();
            }
        };

        // Provider relevance order is the ranking; never re-sorted.
        places
            .into_iter()
            .take(MAX_VENUES)
            .map(venue_from_place)
            .collect()
    }
}

fn venue_from_place(place: NearbyPlace) -> Venue {
    let cuisine = derive_cuisine(&place.types);

    Venue {
        place_id: place.place_id,
        name: place.name,
        rating: place.rating.unwrap_or(0.0),
        user_ratings_total: place.user_ratings_total.unwrap_or(0),
        price_level: place.price_level.unwrap_or(1),
        vicinity: place.vicinity.unwrap_or_default(),
        location: place.geometry.location,
        types: place.types,
        cuisine,
        photos: place.photos.unwrap_or_default(),
        fairness: None,
        verdict: None,
        details_loaded: false,
        website: None,
        phone: None,
        maps_url: None,
        opening_hours: None,
    }
}
