use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Waypoint { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<&Waypoint> for geo_types::Point {
    fn from(waypoint: &Waypoint) -> Self {
        geo_types::Point::new(waypoint.lng, waypoint.lat)
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("at least 2 waypoints are required, got {actual}")]
    TooFewWaypoints { actual: usize },

    #[error("at most {max} waypoints are supported, got {actual}")]
    TooManyWaypoints { actual: usize, max: usize },

    #[error("waypoint {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

pub fn validate_waypoints(
    waypoints: &[Waypoint],
    max_waypoints: usize,
) -> Result<(), ValidationError> {
    if waypoints.len() < 2 {
        return Err(ValidationError::TooFewWaypoints {
            actual: waypoints.len(),
        });
    }

    if waypoints.len() > max_waypoints {
        return Err(ValidationError::TooManyWaypoints {
            actual: waypoints.len(),
            max: max_waypoints,
        });
    }

    if let Some(index) = waypoints.iter().position(|waypoint| !waypoint.is_finite()) {
        return Err(ValidationError::NonFiniteCoordinate { index });
    }

    Ok(())
}
