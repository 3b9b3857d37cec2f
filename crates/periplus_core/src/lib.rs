pub mod distance_matrix;
pub mod visit_order;
pub mod waypoint;
