mod haversine;
mod ranker;

pub use haversine::{EARTH_RADIUS_KM, distance_km, rounded_distance_km};
pub use ranker::{SortKey, rank_by_distance, rank_by_distance_with};
