use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, OpeningHours};

/// A candidate restaurant. Search populates the base fields; fairness
/// annotation and detail enrichment fill in the rest later, in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Venue {
    pub place_id: String,
    pub name: String,
    pub rating: f64,
    pub user_ratings_total: i64,
    pub price_level: u8,
    pub vicinity: String,
    pub location: Coordinates,
    pub types: Vec<String>,
    pub cuisine: Option<String>,
    pub photos: Vec<Photo>,
    pub fairness: Option<Fairness>,
    pub verdict: Option<String>,
    pub details_loaded: bool,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub maps_url: Option<String>,
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Photo {
    pub photo_reference: String,
    pub height: i64,
    pub width: i64,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Detail fields fetched on demand. Applying the same patch twice leaves the
/// venue unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VenueDetails {
    pub website: Option<String>,
    pub phone: Option<String>,
    pub maps_url: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub photos: Option<Vec<Photo>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fairness {
    pub travel_time_a: String,
    pub travel_time_b: String,
    pub seconds_a: i64,
    pub seconds_b: i64,
    pub tier: FairnessTier,
    pub color: ColorTag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessTier {
    VeryFair,
    Fair,
    MostlyFair,
    Unfair,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Green,
    Orange,
    Red,
}

impl FairnessTier {
    /// Tier from the absolute commute difference, in whole rounded minutes.
    /// Boundaries are inclusive on the lower tier.
    pub fn from_seconds(seconds_a: i64, seconds_b: i64) -> Self {
        let diff_mins = ((seconds_a - seconds_b).abs() as f64 / 60.0).round() as i64;

        if diff_mins <= 5 {
            FairnessTier::VeryFair
        } else if diff_mins <= 10 {
            FairnessTier::Fair
        } else if diff_mins <= 15 {
            FairnessTier::MostlyFair
        } else {
            FairnessTier::Unfair
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            FairnessTier::VeryFair | FairnessTier::Fair => ColorTag::Green,
            FairnessTier::MostlyFair => ColorTag::Orange,
            FairnessTier::Unfair => ColorTag::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FairnessTier::VeryFair => "Very Fair",
            FairnessTier::Fair => "Fair",
            FairnessTier::MostlyFair => "Mostly Fair",
            FairnessTier::Unfair => "Unfair",
        }
    }
}

impl Fairness {
    pub fn new(travel_time_a: String, seconds_a: i64, travel_time_b: String, seconds_b: i64) -> Self {
        let tier = FairnessTier::from_seconds(seconds_a, seconds_b);

        Self {
            travel_time_a,
            travel_time_b,
            seconds_a,
            seconds_b,
            tier,
            color: tier.color(),
        }
    }
}

impl Venue {
    pub fn apply_details(&mut self, details: VenueDetails) {
        self.website = details.website;
        self.phone = details.phone;
        self.maps_url = details.maps_url;
        self.opening_hours = details.opening_hours;
        if let Some(photos) = details.photos {
            self.photos = photos;
        }
        self.details_loaded = true;
    }
}

/// A human-friendly cuisine label from the provider's category tags: the
/// first tag ending in `_restaurant`, or the literal `pizza` / `steakhouse`
/// types, humanized (underscores to spaces, title case).
pub fn derive_cuisine(types: &[String]) -> Option<String> {
    let tag = types
        .iter()
        .find(|t| t.ends_with("_restaurant") || *t == "pizza" || *t == "steakhouse")?;

    let label = tag
        .trim_end_matches("_restaurant")
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn tier_boundaries() {
        let cases = [
            (5, FairnessTier::VeryFair),
            (6, FairnessTier::Fair),
            (10, FairnessTier::Fair),
            (11, FairnessTier::MostlyFair),
            (15, FairnessTier::MostlyFair),
            (16, FairnessTier::Unfair),
        ];

        for (minutes, expected) in cases {
            assert_eq!(
                FairnessTier::from_seconds(minutes * 60, 0),
                expected,
                "diff of {} minutes",
                minutes
            );
        }
    }

    #[test]
    fn tier_ignores_direction() {
        assert_eq!(
            FairnessTier::from_seconds(0, 20 * 60),
            FairnessTier::Unfair
        );
    }

    #[test]
    fn tier_rounds_to_whole_minutes() {
        // 5m29s rounds down to 5, 5m30s rounds up to 6
        assert_eq!(FairnessTier::from_seconds(329, 0), FairnessTier::VeryFair);
        assert_eq!(FairnessTier::from_seconds(330, 0), FairnessTier::Fair);
    }

    #[test]
    fn tier_colors() {
        assert_eq!(FairnessTier::VeryFair.color(), ColorTag::Green);
        assert_eq!(FairnessTier::Fair.color(), ColorTag::Green);
        assert_eq!(FairnessTier::MostlyFair.color(), ColorTag::Orange);
        assert_eq!(FairnessTier::Unfair.color(), ColorTag::Red);
    }

    #[test]
    fn cuisine_from_restaurant_suffix() {
        let types = strings(&["point_of_interest", "mexican_restaurant", "food"]);
        assert_eq!(derive_cuisine(&types), Some("Mexican".into()));
    }

    #[test]
    fn cuisine_humanizes_multi_word_tags() {
        let types = strings(&["middle_eastern_restaurant"]);
        assert_eq!(derive_cuisine(&types), Some("Middle Eastern".into()));
    }

    #[test]
    fn cuisine_from_explicit_types() {
        assert_eq!(derive_cuisine(&strings(&["pizza"])), Some("Pizza".into()));
        assert_eq!(
            derive_cuisine(&strings(&["steakhouse"])),
            Some("Steakhouse".into())
        );
    }

    #[test]
    fn cuisine_absent_without_a_match() {
        let types = strings(&["restaurant", "food", "establishment"]);
        assert_eq!(derive_cuisine(&types), None);
    }
}
