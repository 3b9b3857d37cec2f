use crate::waypoint::Waypoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn haversine_km(from: &Waypoint, to: &Waypoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lng1 = from.lng.to_radians();
    let lat2 = to.lat.to_radians();
    let lng2 = to.lng.to_radians();

    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Pairwise great-circle distances in kilometers, stored flat.
/// To find the index for a pair of waypoints, use the formula:
/// `index = from * num_waypoints + to`.
pub struct DistanceMatrix {
    distances: Vec<f64>,
    num_waypoints: usize,
}

impl DistanceMatrix {
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let num_waypoints = waypoints.len();
        let mut distances = vec![0.0; num_waypoints * num_waypoints];

        for (i, from) in waypoints.iter().enumerate() {
            for (j, to) in waypoints.iter().enumerate() {
                distances[i * num_waypoints + j] = haversine_km(from, to);
            }
        }

        DistanceMatrix {
            distances,
            num_waypoints,
        }
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.num_waypoints + to]
    }

    pub fn num_waypoints(&self) -> usize {
        self.num_waypoints
    }

    #[cfg(test)]
    pub fn from_distances(distances: Vec<f64>, num_waypoints: usize) -> Self {
        assert_eq!(distances.len(), num_waypoints * num_waypoints);

        DistanceMatrix {
            distances,
            num_waypoints,
        }
    }
}
