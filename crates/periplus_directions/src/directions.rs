use std::future::Future;

use thiserror::Error;

use periplus_core::waypoint::Waypoint;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("provider rejected the request: code {code} - {message}")]
    Service { code: i64, message: String },

    #[error("no route alternative returned for leg")]
    NoRoute,
}

/// Driving directions for one pair of consecutive waypoints.
#[derive(Debug, Clone)]
pub struct Leg {
    pub distance_meters: u64,
    pub duration_seconds: u64,
    /// Path along the travel direction, never empty for a valid leg.
    pub polyline: Vec<Waypoint>,
}

pub trait DrivingDirections: Send + Sync {
    fn driving_leg(
        &self,
        start: Waypoint,
        goal: Waypoint,
    ) -> impl Future<Output = Result<Leg, DirectionsError>> + Send;
}
