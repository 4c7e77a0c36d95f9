mod geo_point;
mod resource;
mod support_org;

pub use geo_point::{GeoError, GeoPoint};
pub use resource::{Locatable, Ranked};
#[cfg(test)]
pub use support_org::SupportOrgBuilder;
pub use support_org::{OrgType, SupportOrg};
