use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::entities::{Coordinates, RegionSelector, Venue, VenueDetails};
use crate::error::Error;

/// Output of search-area resolution. `midpoint` is what gets displayed;
/// `search_center` is what the venue query actually uses (they differ when
/// the midpoint is snapped to the nearest transit station).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ResolvedArea {
    pub coord_a: Coordinates,
    pub coord_b: Coordinates,
    pub midpoint: Coordinates,
    pub search_center: Coordinates,
}

#[derive(Clone, Debug)]
pub struct VerdictRequest {
    pub venue_name: String,
    pub cuisine: String,
    pub travel_time_a: String,
    pub travel_time_b: String,
    pub address_a: String,
    pub address_b: String,
}

#[async_trait]
pub trait ResolverAPI {
    async fn resolve_search_area(
        &self,
        address_a: &str,
        address_b: &str,
        region: &RegionSelector,
    ) -> Result<ResolvedArea, Error>;
}

#[async_trait]
pub trait VenueSearchAPI {
    /// Never fails: a provider failure degrades to an empty list.
    async fn search_venues(
        &self,
        center: Coordinates,
        cuisines: &[String],
        min_price: u8,
        max_price: u8,
    ) -> Vec<Venue>;
}

#[async_trait]
pub trait FairnessAPI {
    async fn evaluate_fairness(
        &self,
        coord_a: Coordinates,
        coord_b: Coordinates,
        venues: Vec<Venue>,
    ) -> Result<Vec<Venue>, Error>;
}

#[async_trait]
pub trait DetailAPI {
    /// Best-effort: a provider failure yields an empty patch.
    async fn enrich_venue(&self, place_id: &str) -> VenueDetails;
}

#[async_trait]
pub trait CommentaryAPI {
    /// Never fails: any generation failure yields the static fallback.
    async fn fairness_verdict(&self, request: &VerdictRequest) -> String;
}

pub trait API: ResolverAPI + VenueSearchAPI + FairnessAPI + DetailAPI + CommentaryAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
