use crate::domain::GeoPoint;

/// Anything with an identity and a fixed position that can be ranked by distance.
pub trait Locatable {
    fn id(&self) -> &str;
    fn location(&self) -> GeoPoint;
}

/// A resource annotated with its distance to an observer.
///
/// The distance is derived from the observer that produced the ranking and can only be
/// set by the ranker, it is recomputed from scratch whenever the observer moves.
#[derive(Clone, PartialEq, Debug)]
pub struct Ranked<T> {
    resource: T,
    distance_km: u32,
}

impl<T> Ranked<T> {
    pub(crate) fn new(resource: T, distance_km: u32) -> Self {
        Ranked { resource, distance_km }
    }

    pub fn resource(&self) -> &T {
        &self.resource
    }

    pub fn distance_km(&self) -> u32 {
        self.distance_km
    }

    pub fn into_resource(self) -> T {
        self.resource
    }
}
