use serde::{Deserialize, Serialize};
use thiserror::Error;

use periplus_core::waypoint::Waypoint;
use periplus_directions::directions::Leg;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("leg {leg} returned an empty polyline")]
    EmptyLegPolyline { leg: usize },
}

/// Merged multi-stop route. This is both the response payload and the
/// cached value, field names follow the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub total_distance_meters: u64,
    pub total_duration_seconds: u64,
    pub polyline: Vec<Waypoint>,
}

/// Stitches consecutive legs into one route. Every leg after the first
/// starts on the previous leg's last point, so that first point is dropped
/// while appending. A leg with an empty polyline violates the provider
/// contract and fails the merge.
pub fn merge_legs(legs: &[Leg]) -> Result<RouteResult, MergeError> {
    let mut total_distance_meters = 0u64;
    let mut total_duration_seconds = 0u64;
    let mut polyline = Vec::new();

    for (i, leg) in legs.iter().enumerate() {
        if leg.polyline.is_empty() {
            return Err(MergeError::EmptyLegPolyline { leg: i });
        }

        total_distance_meters += leg.distance_meters;
        total_duration_seconds += leg.duration_seconds;

        let skip = if i == 0 { 0 } else { 1 };
        polyline.extend(leg.polyline.iter().skip(skip).copied());
    }

    Ok(RouteResult {
        total_distance_meters,
        total_duration_seconds,
        polyline,
    })
}
