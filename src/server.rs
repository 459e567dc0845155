use std::env;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Extension, Path},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    api::{DynAPI, VerdictRequest, API},
    entities::{
        hours_status, today_hours_line, HoursStatus, RegionSelector, Venue, CUISINE_OPTIONS,
        REGION_PRESETS,
    },
    error::{invalid_input_error, invalid_state_error, Error},
    session::{transition, Event, SessionState, Stage},
};

pub type SharedSession = Arc<Mutex<SessionState>>;

pub async fn serve<T: API + Send + Sync + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;
    let session: SharedSession = Arc::new(Mutex::new(SessionState::new()));

    // Key bootstrapping is environment-driven; the session unlocks only once
    // the mapping provider key is configured.
    if env::var("GOOGLE_MAPS_API_KEY").is_ok() {
        apply(&session, Event::KeyAccepted);
    }

    let app = Router::new()
        .route("/", get(root))
        .route("/options", get(options))
        .route("/state", get(get_state))
        .route("/search", post(search))
        .route("/venues/:place_id/select", post(select))
        .route("/reset", post(reset))
        .layer(Extension(api))
        .layer(Extension(session));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub address_a: String,
    pub address_b: String,
    #[serde(default)]
    pub region: RegionSelector,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default = "default_price_band")]
    pub price_band: Vec<u8>,
}

fn default_price_band() -> Vec<u8> {
    vec![2, 3]
}

#[derive(Clone, Debug, Serialize)]
pub struct SelectedVenue {
    pub venue: Venue,
    pub hours_status: HoursStatus,
    pub today_hours: Option<String>,
}

pub fn apply(session: &SharedSession, event: Event) {
    let mut guard = session.lock().unwrap();
    let state = std::mem::take(&mut *guard);
    *guard = transition(state, event);
}

pub fn snapshot(session: &SharedSession) -> SessionState {
    session.lock().unwrap().clone()
}

/// The search pipeline: resolve both parties and the search center, query
/// venues, annotate fairness, then commit through the reducer. A completion
/// whose generation has been superseded is dropped by the reducer.
pub async fn run_search(
    api: &DynAPI,
    session: &SharedSession,
    request: SearchRequest,
) -> Result<SessionState, Error> {
    if request.address_a.trim().is_empty() || request.address_b.trim().is_empty() {
        return Err(invalid_input_error());
    }

    let generation = {
        let mut guard = session.lock().unwrap();
        let state = std::mem::take(&mut *guard);

        if state.stage == Stage::AwaitingKey {
            *guard = state;
            return Err(invalid_state_error());
        }

        let next = transition(
            state,
            Event::SearchStarted {
                address_a: request.address_a.clone(),
                address_b: request.address_b.clone(),
                region: request.region.clone(),
                cuisines: request.cuisines.clone(),
                price_band: request.price_band.clone(),
            },
        );
        let generation = next.generation;
        *guard = next;
        generation
    };

    let outcome = async {
        let area = api
            .resolve_search_area(&request.address_a, &request.address_b, &request.region)
            .await?;

        apply(
            session,
            Event::LocationsResolved {
                generation,
                coord_a: area.coord_a,
                coord_b: area.coord_b,
            },
        );

        let min_price = request.price_band.iter().copied().min().unwrap_or(1);
        let max_price = request.price_band.iter().copied().max().unwrap_or(4);

        let venues = api
            .search_venues(area.search_center, &request.cuisines, min_price, max_price)
            .await;
        let venues = api.evaluate_fairness(area.coord_a, area.coord_b, venues).await?;

        Ok::<_, Error>((area.midpoint, venues))
    }
    .await;

    match outcome {
        Ok((midpoint, venues)) => {
            apply(
                session,
                Event::SearchCompleted {
                    generation,
                    midpoint,
                    venues,
                },
            );
        }
        Err(err) => {
            apply(
                session,
                Event::SearchFailed {
                    generation,
                    message: err.message.clone(),
                },
            );
            return Err(err);
        }
    }

    Ok(snapshot(session))
}

/// On-demand enrichment for one venue. The `details_loaded` flag makes a
/// repeat selection skip the provider round trip; rapid re-selects that race
/// past it are harmless since the writes are equivalent.
pub async fn select_venue(
    api: &DynAPI,
    session: &SharedSession,
    place_id: &str,
) -> Result<SelectedVenue, Error> {
    let (venue, address_a, address_b) = {
        let guard = session.lock().unwrap();
        let venue = guard
            .results
            .iter()
            .find(|v| v.place_id == place_id)
            .cloned()
            .ok_or_else(invalid_input_error)?;

        (
            venue,
            guard.location_a.address.clone(),
            guard.location_b.address.clone(),
        )
    };

    if !venue.details_loaded {
        let details = api.enrich_venue(place_id).await;
        apply(
            session,
            Event::DetailsLoaded {
                place_id: place_id.into(),
                details,
            },
        );
    }

    if venue.verdict.is_none() {
        let request = VerdictRequest {
            venue_name: venue.name.clone(),
            cuisine: venue.cuisine.clone().unwrap_or_else(|| "restaurant".into()),
            travel_time_a: venue
                .fairness
                .as_ref()
                .map(|f| f.travel_time_a.clone())
                .unwrap_or_else(|| "?".into()),
            travel_time_b: venue
                .fairness
                .as_ref()
                .map(|f| f.travel_time_b.clone())
                .unwrap_or_else(|| "?".into()),
            address_a,
            address_b,
        };

        let verdict = api.fairness_verdict(&request).await;
        apply(
            session,
            Event::VerdictReady {
                place_id: place_id.into(),
                verdict,
            },
        );
    }

    let venue = {
        let guard = session.lock().unwrap();
        guard
            .results
            .iter()
            .find(|v| v.place_id == place_id)
            .cloned()
            .ok_or_else(invalid_input_error)?
    };

    let now = Local::now();
    let day = now.weekday().num_days_from_sunday() as u8;
    let hhmm = now.hour() * 100 + now.minute();

    let status = hours_status(venue.opening_hours.as_ref(), day, hhmm);
    let today = venue
        .opening_hours
        .as_ref()
        .and_then(|h| today_hours_line(h, day))
        .map(String::from);

    Ok(SelectedVenue {
        venue,
        hours_status: status,
        today_hours: today,
    })
}

async fn root() -> &'static str {
    "halfway"
}

async fn options() -> Json<Value> {
    let regions: Vec<Value> = REGION_PRESETS
        .iter()
        .map(|(label, value)| json!({ "label": label, "value": value }))
        .collect();

    Json(json!({ "regions": regions, "cuisines": CUISINE_OPTIONS }))
}

async fn get_state(Extension(session): Extension<SharedSession>) -> Json<SessionState> {
    Json(snapshot(&session))
}

async fn search(
    Extension(api): Extension<DynAPI>,
    Extension(session): Extension<SharedSession>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SessionState>, Error> {
    let state = run_search(&api, &session, request).await?;

    Ok(state.into())
}

async fn select(
    Extension(api): Extension<DynAPI>,
    Extension(session): Extension<SharedSession>,
    Path(place_id): Path<String>,
) -> Result<Json<SelectedVenue>, Error> {
    let selected = select_venue(&api, &session, &place_id).await?;

    Ok(selected.into())
}

async fn reset(Extension(session): Extension<SharedSession>) -> Json<SessionState> {
    apply(&session, Event::Reset);

    Json(snapshot(&session))
}
