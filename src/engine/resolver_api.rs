use super::Engine;

use async_trait::async_trait;
use futures::try_join;

use crate::{
    api::{ResolvedArea, ResolverAPI},
    entities::{Coordinates, RegionSelector},
    error::Error,
    external::google_maps,
};

#[async_trait]
impl ResolverAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_search_area(
        &self,
        address_a: &str,
        address_b: &str,
        region: &RegionSelector,
    ) -> Result<ResolvedArea, Error> {
        // Independent lookups; either failure aborts the whole resolution.
        let (coord_a, coord_b) = try_join!(
            google_maps::geocode(address_a),
            google_maps::geocode(address_b)
        )?;

        match region {
            RegionSelector::Named(place) => {
                let center = google_maps::geocode(place).await?;

                Ok(ResolvedArea {
                    coord_a,
                    coord_b,
                    midpoint: center,
                    search_center: center,
                })
            }
            RegionSelector::Midpoint => {
                let midpoint = Coordinates::midpoint(coord_a, coord_b);

                // Snap to the closest transit station when one exists, so the
                // search favors venues reachable car-free. Lookup failure is
                // soft; the raw midpoint is used instead.
                let search_center = match google_maps::nearest_transit_stations(midpoint).await {
                    Ok(stations) => stations
                        .first()
                        .map(|station| station.geometry.location)
                        .unwrap_or(midpoint),
                    Err(err) => {
                        tracing::warn!("transit station lookup failed: {:?}", err);
                        midpoint
                    }
                };

                Ok(ResolvedArea {
                    coord_a,
                    coord_b,
                    midpoint,
                    search_center,
                })
            }
        }
    }
}
