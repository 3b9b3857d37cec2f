pub mod cache_backend;
pub mod fingerprint;
pub mod memory_cache;
pub mod redis_cache;
pub mod route_cache;
