use super::Engine;

use async_trait::async_trait;

use crate::{
    api::FairnessAPI,
    entities::{Coordinates, Fairness, Venue},
    error::{routing_error, Error},
    external::google_maps::{self, MatrixRow},
};

#[async_trait]
impl FairnessAPI for Engine {
    #[tracing::instrument(skip(self, venues))]
    async fn evaluate_fairness(
        &self,
        coord_a: Coordinates,
        coord_b: Coordinates,
        mut venues: Vec<Venue>,
    ) -> Result<Vec<Venue>, Error> {
        if venues.is_empty() {
            return Ok(venues);
        }

        let destinations: Vec<Coordinates> = venues.iter().map(|v| v.location).collect();
        let rows = google_maps::travel_time_matrix(coord_a, coord_b, &destinations).await?;

        if rows.len() < 2 {
            return Err(routing_error("MISSING_ROWS"));
        }

        for (index, venue) in venues.iter_mut().enumerate() {
            let (time_a, seconds_a) = cell(&rows[0], index);
            let (time_b, seconds_b) = cell(&rows[1], index);

            venue.fairness = Some(Fairness::new(time_a, seconds_a, time_b, seconds_b));
        }

        Ok(venues)
    }
}

/// A cell without a duration degrades to a "?" display and zero seconds; the
/// zero feeds the fairness diff as-is, a known approximation.
fn cell(row: &MatrixRow, index: usize) -> (String, i64) {
    match row.elements.get(index).and_then(|e| e.duration.as_ref()) {
        Some(duration) => (duration.text.clone(), duration.value),
        None => ("?".into(), 0),
    }
}
