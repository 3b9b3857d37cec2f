use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use periplus_engine::planner::RoutingError;

pub enum ApiError {
    BadRequest(String),
    ServiceUnavailable(String),
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        match error {
            RoutingError::Validation(_) => ApiError::BadRequest(error.to_string()),
            RoutingError::Provider(_) | RoutingError::Contract(_) => {
                ApiError::ServiceUnavailable(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::ServiceUnavailable(message) => {
                (StatusCode::SERVICE_UNAVAILABLE, message).into_response()
            }
        }
    }
}
