use crate::domain::{GeoPoint, Locatable};
use serde::Deserialize;
use std::fmt::Display;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize)]
pub enum OrgType {
    #[serde(rename = "NGO")]
    Ngo,
    #[serde(rename = "Legal Aid")]
    LegalAid,
    Healthcare,
    Housing,
    #[serde(rename = "Labor Rights")]
    LaborRights,
}

impl Display for OrgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrgType::Ngo => "NGO",
            OrgType::LegalAid => "Legal Aid",
            OrgType::Healthcare => "Healthcare",
            OrgType::Housing => "Housing",
            OrgType::LaborRights => "Labor Rights",
        };
        write!(f, "{}", label)
    }
}

/// An organization offering help to workers, e.g. legal aid or emergency housing.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportOrg {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: OrgType,
    pub location: GeoPoint,
    pub address: String,
    pub contact: String,
    pub email: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub open_hours: String,
}

impl Locatable for SupportOrg {
    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> GeoPoint {
        self.location
    }
}

#[cfg(test)]
pub struct SupportOrgBuilder {
    org: SupportOrg,
}

#[cfg(test)]
impl SupportOrgBuilder {
    pub fn new(id: &str, latitude: f64, longitude: f64) -> Self {
        SupportOrgBuilder {
            org: SupportOrg {
                id: id.to_string(),
                name: format!("Organization {}", id),
                org_type: OrgType::Ngo,
                location: GeoPoint { latitude, longitude },
                address: "Address".to_string(),
                contact: "+33-1-0000-0000".to_string(),
                email: "help@example.org".to_string(),
                services: vec![],
                open_hours: "Mon-Fri: 9AM-5PM".to_string(),
            },
        }
    }

    pub fn org_type(mut self, org_type: OrgType) -> Self {
        self.org.org_type = org_type;
        self
    }

    pub fn build(self) -> SupportOrg {
        self.org
    }
}
