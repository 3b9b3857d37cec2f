pub mod planner;
pub mod route;
