use crate::domain::{GeoPoint, Locatable, Ranked};
use crate::proximity::haversine::{distance_km, round_km};
use ordered_float::OrderedFloat;
use serde::Deserialize;
use tracing::{instrument, trace};

/// Which distance the ranking is ordered by.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Order by the whole kilometer distance, resources at the same rounded distance keep
    /// their input order.
    #[default]
    Rounded,
    /// Order by the exact distance and only round the reported distance. Resources within
    /// the same kilometer are ordered by how close they really are.
    Exact,
}

/// Ranks `resources` nearest-first relative to `observer`, each annotated with its distance
/// in whole kilometers. Resources at equal distance keep their relative input order.
pub fn rank_by_distance<T>(observer: GeoPoint, resources: &[T]) -> Vec<Ranked<T>>
where
    T: Locatable + Clone,
{
    rank_by_distance_with(observer, resources, SortKey::Rounded)
}

#[instrument(skip(resources), fields(count = resources.len()))]
pub fn rank_by_distance_with<T>(observer: GeoPoint, resources: &[T], sort_key: SortKey) -> Vec<Ranked<T>>
where
    T: Locatable + Clone,
{
    let mut measured = resources
        .iter()
        .map(|resource| (distance_km(observer, resource.location()), resource))
        .collect::<Vec<_>>();

    // `sort_by_key` is stable, equal keys keep their input order
    match sort_key {
        SortKey::Rounded => measured.sort_by_key(|(distance, _)| round_km(*distance)),
        SortKey::Exact => measured.sort_by_key(|(distance, _)| OrderedFloat(*distance)),
    }

    trace!("Ranked {} resource(s) from {}", measured.len(), observer);
    measured
        .into_iter()
        .map(|(distance, resource)| Ranked::new(resource.clone(), round_km(distance)))
        .collect()
}
