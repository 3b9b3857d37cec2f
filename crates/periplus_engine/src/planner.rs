use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use thiserror::Error;
use tracing::{debug, warn};

use periplus_cache::fingerprint::route_fingerprint;
use periplus_cache::route_cache::RouteCache;
use periplus_core::distance_matrix::DistanceMatrix;
use periplus_core::visit_order::optimal_visit_order;
use periplus_core::waypoint::{ValidationError, Waypoint, validate_waypoints};
use periplus_directions::directions::{DirectionsError, DrivingDirections, Leg};

use crate::route::{MergeError, RouteResult, merge_legs};

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("directions provider failed: {0}")]
    Provider(#[from] DirectionsError),

    #[error(transparent)]
    Contract(#[from] MergeError),
}

pub struct RoutePlannerParams {
    /// Hard ceiling on the request size, the visit-order solver is
    /// exponential in the number of waypoints.
    pub max_waypoints: usize,
    pub cache_ttl: Duration,
    /// Provider calls in flight at once. 1 keeps the legs strictly
    /// sequential, results are joined in leg order at any setting.
    pub max_concurrent_legs: usize,
}

impl Default for RoutePlannerParams {
    fn default() -> Self {
        RoutePlannerParams {
            max_waypoints: 15,
            cache_ttl: Duration::from_secs(600),
            max_concurrent_legs: 1,
        }
    }
}

pub struct RoutePlanner<D, C> {
    directions: D,
    cache: C,
    params: RoutePlannerParams,
}

impl<D, C> RoutePlanner<D, C>
where
    D: DrivingDirections,
    C: RouteCache,
{
    pub fn new(directions: D, cache: C, params: RoutePlannerParams) -> Self {
        RoutePlanner {
            directions,
            cache,
            params,
        }
    }

    /// Full pipeline for one request: validate, check the cache, find the
    /// optimal visiting order, fetch per-leg directions, merge, store.
    /// The fingerprint covers the caller's original waypoint order, not
    /// the optimized one.
    pub async fn compute_route(
        &self,
        waypoints: &[Waypoint],
    ) -> Result<RouteResult, RoutingError> {
        validate_waypoints(waypoints, self.params.max_waypoints)?;

        let key = route_fingerprint(waypoints);

        if let Some(route) = self.cached_route(&key).await {
            debug!("RoutePlanner: cache hit for {}", key);
            return Ok(route);
        }

        let matrix = DistanceMatrix::from_waypoints(waypoints);
        let order = optimal_visit_order(&matrix);
        let ordered: Vec<Waypoint> = order.iter().map(|&index| waypoints[index]).collect();

        let legs = self.fetch_legs(&ordered).await?;
        let route = merge_legs(&legs)?;

        self.store_route(&key, &route).await;

        Ok(route)
    }

    async fn fetch_legs(&self, waypoints: &[Waypoint]) -> Result<Vec<Leg>, DirectionsError> {
        let concurrency = self.params.max_concurrent_legs.max(1);

        // Owned pairs keep the closure free of reference arguments, which
        // rustc cannot prove general enough when the future must be Send.
        let pairs: Vec<(Waypoint, Waypoint)> = waypoints
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();

        stream::iter(
            pairs
                .into_iter()
                .map(|(start, goal)| self.directions.driving_leg(start, goal)),
        )
        .buffered(concurrency)
        .try_collect()
        .await
    }

    async fn cached_route(&self, key: &str) -> Option<RouteResult> {
        let value = match self.cache.get(key).await {
            Ok(value) => value,
            Err(error) => {
                warn!("RoutePlanner: cache read failed for {}: {}", key, error);
                return None;
            }
        };

        match value.as_deref().map(serde_json::from_str::<RouteResult>) {
            Some(Ok(route)) => Some(route),
            Some(Err(error)) => {
                warn!(
                    "RoutePlanner: discarding unreadable cache entry {}: {}",
                    key, error
                );
                None
            }
            None => None,
        }
    }

    async fn store_route(&self, key: &str, route: &RouteResult) {
        let value = match serde_json::to_string(route) {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    "RoutePlanner: could not serialize route for {}: {}",
                    key, error
                );
                return;
            }
        };

        if let Err(error) = self.cache.set(key, &value, self.params.cache_ttl).await {
            warn!("RoutePlanner: cache write failed for {}: {}", key, error);
        }
    }
}
