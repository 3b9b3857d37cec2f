mod error;
mod routing;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::Method;
use axum::routing::post;
use axum::{Router, serve};
use periplus_cache::cache_backend::RouteCacheBackend;
use periplus_cache::memory_cache::MemoryRouteCache;
use periplus_cache::redis_cache::RedisRouteCache;
use periplus_directions::naver_api::{
    NAVER_DIRECTIONS_API_URL, NaverDirectionsClient, NaverDirectionsClientParams, RouteOption,
};
use periplus_engine::planner::{RoutePlanner, RoutePlannerParams};
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info, warn};

use crate::routing::routing_handler;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let client_id =
        std::env::var("NAVER_MAP_CLIENT_ID").context("NAVER_MAP_CLIENT_ID is not set")?;
    let client_secret =
        std::env::var("NAVER_MAP_CLIENT_SECRET").context("NAVER_MAP_CLIENT_SECRET is not set")?;

    let directions = NaverDirectionsClient::new(NaverDirectionsClientParams {
        client_id,
        client_secret,
        base_url: NAVER_DIRECTIONS_API_URL.to_string(),
        route_option: RouteOption::Trafast,
        timeout: Duration::from_secs(10),
    })?;

    let cache = match std::env::var("REDIS_URL") {
        Ok(url) => RouteCacheBackend::Redis(RedisRouteCache::connect(&url).await?),
        Err(_) => {
            warn!("REDIS_URL is not set, route results are cached in process memory");
            RouteCacheBackend::Memory(MemoryRouteCache::new())
        }
    };

    let state = Arc::new(AppState {
        planner: RoutePlanner::new(directions, cache, RoutePlannerParams::default()),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/routing", post(routing_handler))
        .layer(cors_layer)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;

    info!("periplus api listening on 127.0.0.1:8080");

    serve(listener, app).await?;

    Ok(())
}
