use std::hash::{Hash, Hasher};

use fxhash::FxHasher64;

const ROUTE_KEY_PREFIX: &str = "routing:";

fn hash_points<H, P>(points: &[P], hasher: &mut H)
where
    H: Hasher,
    for<'a> &'a P: Into<geo_types::Point>,
{
    points.len().hash(hasher);
    for point in points {
        let point: geo_types::Point = point.into();
        hasher.write_u64(point.x().to_bits());
        hasher.write_u64(point.y().to_bits());
    }
}

/// Cache key for a route request. The key is derived from the raw input
/// order and the exact coordinate bit patterns, so reordered lists and
/// lists differing in floating-point noise map to distinct entries.
pub fn route_fingerprint<P>(points: &[P]) -> String
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    let mut hasher = FxHasher64::default();

    hash_points(points, &mut hasher);

    format!("{}{:016x}", ROUTE_KEY_PREFIX, hasher.finish())
}
