pub mod directions;
pub mod naver_api;
