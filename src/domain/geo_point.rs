use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A position on earth in decimal degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Used as the observer location when no real position is known.
    pub const PARIS: GeoPoint = GeoPoint {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        // NaN is never contained, so it is rejected as well
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }

        Ok(GeoPoint { latitude, longitude })
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        GeoPoint::PARIS
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = GeoError;

    /// Parses `"<latitude>,<longitude>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (latitude, longitude) = s.split_once(',').ok_or_else(|| GeoError::Malformed(s.to_string()))?;
        let latitude = latitude.trim().parse::<f64>().map_err(|_| GeoError::Malformed(s.to_string()))?;
        let longitude = longitude.trim().parse::<f64>().map_err(|_| GeoError::Malformed(s.to_string()))?;

        GeoPoint::new(latitude, longitude)
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum GeoError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("malformed location '{0}', expected '<latitude>,<longitude>'")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(48.8566, 2.3522)]
    fn new_accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        assert_eq!(GeoPoint::new(latitude, longitude), Ok(GeoPoint { latitude, longitude }));
    }

    #[rstest]
    #[case(90.1, 0.0, GeoError::InvalidLatitude(90.1))]
    #[case(-91.0, 0.0, GeoError::InvalidLatitude(-91.0))]
    #[case(0.0, 180.5, GeoError::InvalidLongitude(180.5))]
    #[case(0.0, -200.0, GeoError::InvalidLongitude(-200.0))]
    fn new_rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: GeoError) {
        assert_eq!(GeoPoint::new(latitude, longitude), Err(expected));
    }

    #[test]
    fn new_rejects_nan() {
        assert!(matches!(GeoPoint::new(f64::NAN, 0.0), Err(GeoError::InvalidLatitude(_))));
    }

    #[rstest]
    #[case("52.52,13.405", GeoPoint { latitude: 52.52, longitude: 13.405 })]
    #[case(" 25.2048 , 55.2708 ", GeoPoint { latitude: 25.2048, longitude: 55.2708 })]
    #[case("-33.8688,151.2093", GeoPoint { latitude: -33.8688, longitude: 151.2093 })]
    fn parse_valid_locations(#[case] input: &str, #[case] expected: GeoPoint) {
        assert_eq!(input.parse::<GeoPoint>(), Ok(expected));
    }

    #[rstest]
    #[case("52.52")]
    #[case("north,east")]
    #[case("")]
    fn parse_malformed_locations(#[case] input: &str) {
        assert_eq!(input.parse::<GeoPoint>(), Err(GeoError::Malformed(input.to_string())));
    }

    #[test]
    fn parse_out_of_range_location() {
        assert_eq!("95,10".parse::<GeoPoint>(), Err(GeoError::InvalidLatitude(95.0)));
    }

    #[test]
    fn default_is_paris() {
        assert_eq!(GeoPoint::default(), GeoPoint::PARIS);
    }
}
