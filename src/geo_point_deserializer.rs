use crate::domain::GeoPoint;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(alias = "lat")]
            latitude: f64,
            #[serde(alias = "lng")]
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoPoint::new(inner.latitude, inner.longitude).map_err(|e| Error::custom(format!("invalid location: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_long_form() {
        let point: GeoPoint = serde_json::from_value(json!({ "latitude": 52.52, "longitude": 13.405 })).unwrap();
        assert_eq!(point, GeoPoint { latitude: 52.52, longitude: 13.405 });
    }

    #[test]
    fn deserialize_short_form() {
        let point: GeoPoint = serde_json::from_value(json!({ "lat": 1.3521, "lng": 103.8198 })).unwrap();
        assert_eq!(point, GeoPoint { latitude: 1.3521, longitude: 103.8198 });
    }

    #[test]
    fn deserialize_rejects_invalid_latitude() {
        let result = serde_json::from_value::<GeoPoint>(json!({ "lat": 91.0, "lng": 0.0 }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("invalid latitude: 91"), "unexpected message: {}", message);
    }

    #[test]
    fn deserialize_rejects_invalid_longitude() {
        let result = serde_json::from_value::<GeoPoint>(json!({ "lat": 0.0, "lng": -181.0 }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("invalid longitude: -181"), "unexpected message: {}", message);
    }

    #[test]
    fn deserialize_rejects_missing_longitude() {
        assert!(serde_json::from_value::<GeoPoint>(json!({ "lat": 0.0 })).is_err());
    }
}
