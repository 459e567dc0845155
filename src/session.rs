use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, PartyLocation, RegionSelector, Venue, VenueDetails};

/// Workflow position. Key acceptance happens once at startup; everything
/// after that cycles between input, searching and results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    AwaitingKey,
    Input,
    Searching,
    Results,
}

/// The whole per-session state. Mutated only through [`transition`]; readers
/// get snapshots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub stage: Stage,
    pub location_a: PartyLocation,
    pub location_b: PartyLocation,
    pub region: RegionSelector,
    pub cuisines: Vec<String>,
    pub price_band: Vec<u8>,
    pub results: Vec<Venue>,
    pub midpoint: Option<Coordinates>,
    pub error: Option<String>,
    /// Bumped on every search start and reset; completions carrying an older
    /// generation are discarded as stale.
    pub generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitingKey,
            location_a: PartyLocation::new("Person A"),
            location_b: PartyLocation::new("Person B"),
            region: RegionSelector::default(),
            cuisines: Vec::new(),
            price_band: vec![2, 3],
            results: Vec::new(),
            midpoint: None,
            error: None,
            generation: 0,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub enum Event {
    KeyAccepted,
    SearchStarted {
        address_a: String,
        address_b: String,
        region: RegionSelector,
        cuisines: Vec<String>,
        price_band: Vec<u8>,
    },
    LocationsResolved {
        generation: u64,
        coord_a: Coordinates,
        coord_b: Coordinates,
    },
    SearchCompleted {
        generation: u64,
        midpoint: Coordinates,
        venues: Vec<Venue>,
    },
    SearchFailed {
        generation: u64,
        message: String,
    },
    DetailsLoaded {
        place_id: String,
        details: VenueDetails,
    },
    VerdictReady {
        place_id: String,
        verdict: String,
    },
    Reset,
}

pub fn transition(mut state: SessionState, event: Event) -> SessionState {
    match event {
        Event::KeyAccepted => {
            if state.stage == Stage::AwaitingKey {
                state.stage = Stage::Input;
            }
        }
        Event::SearchStarted {
            address_a,
            address_b,
            region,
            cuisines,
            price_band,
        } => {
            state.location_a.address = address_a;
            state.location_a.coords = None;
            state.location_b.address = address_b;
            state.location_b.coords = None;
            state.region = region;
            state.cuisines = cuisines;
            state.price_band = price_band;
            state.error = None;
            state.generation += 1;
            state.stage = Stage::Searching;
        }
        Event::LocationsResolved {
            generation,
            coord_a,
            coord_b,
        } => {
            if generation == state.generation {
                state.location_a.coords = Some(coord_a);
                state.location_b.coords = Some(coord_b);
            }
        }
        Event::SearchCompleted {
            generation,
            midpoint,
            venues,
        } => {
            // An empty venue list still advances to results; "nothing found"
            // is not an error.
            if generation == state.generation {
                state.results = venues;
                state.midpoint = Some(midpoint);
                state.error = None;
                state.stage = Stage::Results;
            }
        }
        Event::SearchFailed {
            generation,
            message,
        } => {
            if generation == state.generation {
                state.error = Some(message);
                state.stage = Stage::Input;
            }
        }
        Event::DetailsLoaded { place_id, details } => {
            if let Some(venue) = state.results.iter_mut().find(|v| v.place_id == place_id) {
                venue.apply_details(details);
            }
        }
        Event::VerdictReady { place_id, verdict } => {
            if let Some(venue) = state.results.iter_mut().find(|v| v.place_id == place_id) {
                venue.verdict = Some(verdict);
            }
        }
        Event::Reset => {
            let generation = state.generation + 1;
            // A session that never accepted a key stays locked; reset is not
            // a way around the key gate.
            let stage = if state.stage == Stage::AwaitingKey {
                Stage::AwaitingKey
            } else {
                Stage::Input
            };
            state = SessionState::new();
            state.stage = stage;
            state.generation = generation;
        }
    }

    state
}
