use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Arithmetic mean per axis. Flat-earth averaging is a known
    /// approximation that holds up at city scale; do not replace it with a
    /// spherical formula, that would change behavior.
    pub fn midpoint(a: Coordinates, b: Coordinates) -> Coordinates {
        Coordinates {
            lat: (a.lat + b.lat) / 2.0,
            lng: (a.lng + b.lng) / 2.0,
        }
    }
}

impl From<Coordinates> for String {
    fn from(c: Coordinates) -> Self {
        format!("{},{}", c.lat, c.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_exact_per_axis() {
        let a = Coordinates::new(40.7128, -74.0060);
        let b = Coordinates::new(40.6782, -73.9442);

        let mid = Coordinates::midpoint(a, b);

        assert_eq!(mid.lat, (40.7128 + 40.6782) / 2.0);
        assert_eq!(mid.lng, (-74.0060 + -73.9442) / 2.0);
    }

    #[test]
    fn query_param_form() {
        let s: String = Coordinates::new(40.5, -73.25).into();
        assert_eq!(s, "40.5,-73.25");
    }
}
