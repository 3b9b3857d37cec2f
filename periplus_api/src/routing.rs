use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use periplus_core::waypoint::Waypoint;
use periplus_engine::route::RouteResult;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RoutingRequestBody {
    points: Vec<Waypoint>,
}

pub async fn routing_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RoutingRequestBody>,
) -> Result<Json<RouteResult>, ApiError> {
    let route = state.planner.compute_route(&body.points).await?;

    Ok(Json(route))
}
