mod coordinates;
mod hours;
mod party;
mod region;
mod venue;

pub use coordinates::Coordinates;
pub use hours::{hours_status, today_hours_line, DayTime, HoursStatus, OpeningHours, Period};
pub use party::PartyLocation;
pub use region::{RegionSelector, CUISINE_OPTIONS, REGION_PRESETS};
pub use venue::{derive_cuisine, ColorTag, Fairness, FairnessTier, Photo, Venue, VenueDetails};
