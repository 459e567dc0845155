mod commentary_api;
mod detail_api;
mod fairness_api;
mod resolver_api;
mod venue_api;

pub use commentary_api::FALLBACK_VERDICT;
pub use venue_api::MAX_VENUES;

use crate::api::API;

/// Implements each capability trait by delegating to the external provider
/// clients; holds no state of its own.
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }
}

impl API for Engine {}
