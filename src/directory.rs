use crate::domain::{GeoPoint, Locatable, OrgType, Ranked, SupportOrg};
use crate::proximity::{SortKey, rank_by_distance_with};
use std::fmt::Debug;
use tokio::sync::watch::Receiver;
use tracing::{debug, info, instrument};

/// Owns a collection of resources together with the observer location and keeps the
/// nearest-first ranking of the collection in sync with that location.
#[derive(Debug)]
pub struct Directory<T> {
    resources: Vec<T>,
    observer: GeoPoint,
    sort_key: SortKey,
    ranked: Vec<Ranked<T>>,
}

impl<T> Directory<T>
where
    T: Locatable + Clone + Debug,
{
    pub fn new(resources: Vec<T>, observer: GeoPoint, sort_key: SortKey) -> Self {
        let ranked = rank_by_distance_with(observer, &resources, sort_key);
        Directory {
            resources,
            observer,
            sort_key,
            ranked,
        }
    }

    pub fn observer(&self) -> GeoPoint {
        self.observer
    }

    /// Moves the observer and replaces the ranking with a fresh one for the new location.
    #[instrument(skip(self))]
    pub fn relocate(&mut self, observer: GeoPoint) {
        debug!("📍 Relocating from {} to {}...", self.observer, observer);
        self.observer = observer;
        self.ranked = rank_by_distance_with(observer, &self.resources, self.sort_key);
        debug!("📍 Relocating from {} to {}... OK", self.observer, observer);
    }

    pub fn ranked(&self) -> &[Ranked<T>] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn nearest(&self) -> Option<&Ranked<T>> {
        self.ranked.first()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&Ranked<T>>
    where
        P: Fn(&T) -> bool,
    {
        self.ranked.iter().filter(|ranked| predicate(ranked.resource())).collect()
    }

    /// Relocates on every observer change until the sending side is dropped.
    #[instrument(skip_all)]
    pub async fn listen(&mut self, mut rx: Receiver<GeoPoint>) {
        while rx.changed().await.is_ok() {
            let observer = *rx.borrow_and_update();
            self.relocate(observer);

            match self.nearest() {
                Some(nearest) => info!(
                    resource_id = nearest.resource().id(),
                    "📍 Observer moved to {}, nearest is {} km away", observer, nearest.distance_km()
                ),
                None => info!("📍 Observer moved to {}, nothing to rank", observer),
            }
        }
    }
}

impl Directory<SupportOrg> {
    pub fn of_type(&self, org_type: OrgType) -> Vec<&Ranked<SupportOrg>> {
        self.filter(|org| org.org_type == org_type)
    }

    /// Returns the distinct organization types in the order they first appear in the ranking.
    pub fn org_types(&self) -> Vec<OrgType> {
        let mut types = Vec::new();
        for ranked in &self.ranked {
            let org_type = ranked.resource().org_type;
            if !types.contains(&org_type) {
                types.push(org_type);
            }
        }
        types
    }
}
