use serde::{Deserialize, Serialize};

/// Where to center the venue search: the calculated midpoint between the two
/// parties, or a named neighborhood geocoded as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionSelector {
    Midpoint,
    Named(String),
}

/// Wire sentinel for the calculated-midpoint selector.
pub const ANYWHERE: &str = "ANYWHERE";

impl From<String> for RegionSelector {
    fn from(value: String) -> Self {
        if value == ANYWHERE {
            RegionSelector::Midpoint
        } else {
            RegionSelector::Named(value)
        }
    }
}

impl From<RegionSelector> for String {
    fn from(region: RegionSelector) -> Self {
        match region {
            RegionSelector::Midpoint => ANYWHERE.into(),
            RegionSelector::Named(name) => name,
        }
    }
}

impl Default for RegionSelector {
    fn default() -> Self {
        RegionSelector::Midpoint
    }
}

/// Regional presets offered to clients, as (label, value) pairs. The value is
/// either the midpoint sentinel or a geocodable place string.
pub const REGION_PRESETS: &[(&str, &str)] = &[
    ("Anywhere (Calculated Midpoint)", ANYWHERE),
    ("Manhattan", "Manhattan, NY"),
    ("Brooklyn", "Brooklyn, NY"),
    ("Queens", "Queens, NY"),
    ("The Bronx", "The Bronx, NY"),
    ("Staten Island", "Staten Island, NY"),
    ("SoHo", "SoHo, Manhattan, NY"),
    ("East Village", "East Village, Manhattan, NY"),
    ("Williamsburg", "Williamsburg, Brooklyn, NY"),
    ("Astoria", "Astoria, Queens, NY"),
    ("Upper West Side", "Upper West Side, Manhattan, NY"),
    ("Midtown", "Midtown Manhattan, NY"),
    ("Lower East Side", "Lower East Side, Manhattan, NY"),
    ("Chelsea", "Chelsea, Manhattan, NY"),
    ("Financial District", "Financial District, Manhattan, NY"),
    ("Greenpoint", "Greenpoint, Brooklyn, NY"),
    ("DUMBO", "DUMBO, Brooklyn, NY"),
    ("Long Island City", "Long Island City, Queens, NY"),
    ("Harlem", "Harlem, Manhattan, NY"),
];

pub const CUISINE_OPTIONS: &[&str] = &[
    "Italian",
    "Chinese",
    "Japanese",
    "Korean",
    "Mexican",
    "Thai",
    "Indian",
    "American",
    "Mediterranean",
    "French",
    "Vietnamese",
    "Pizza",
    "Burgers",
];
