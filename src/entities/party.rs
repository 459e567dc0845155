use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// One of the two people being matched. The coordinates are populated only
/// after a successful geocode of the raw address.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PartyLocation {
    pub address: String,
    pub coords: Option<Coordinates>,
    pub label: String,
}

impl PartyLocation {
    pub fn new(label: &str) -> Self {
        Self {
            address: String::new(),
            coords: None,
            label: label.into(),
        }
    }
}
