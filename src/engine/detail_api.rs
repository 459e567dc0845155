use super::Engine;

use async_trait::async_trait;

use crate::{api::DetailAPI, entities::VenueDetails, external::google_maps};

#[async_trait]
impl DetailAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn enrich_venue(&self, place_id: &str) -> VenueDetails {
        match google_maps::place_details(place_id).await {
            Ok(detail) => VenueDetails {
                website: detail.website,
                phone: detail.formatted_phone_number,
                maps_url: detail.url,
                opening_hours: detail.opening_hours,
                photos: detail.photos,
            },
            Err(err) => {
                tracing::warn!("detail fetch failed for {}: {:?}", place_id, err);
                VenueDetails::default()
            }
        }
    }
}
