use periplus_cache::cache_backend::RouteCacheBackend;
use periplus_directions::naver_api::NaverDirectionsClient;
use periplus_engine::planner::RoutePlanner;

pub struct AppState {
    pub planner: RoutePlanner<NaverDirectionsClient, RouteCacheBackend>,
}
