use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use periplus_core::waypoint::Waypoint;

use crate::directions::{DirectionsError, DrivingDirections, Leg};

pub const NAVER_DIRECTIONS_API_URL: &str =
    "https://maps.apigw.ntruss.com/map-direction/v1/driving";

const CLIENT_ID_HEADER: &str = "X-NCP-APIGW-API-KEY-ID";
const CLIENT_SECRET_HEADER: &str = "X-NCP-APIGW-API-KEY";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RouteOption {
    Trafast,
    Tracomfort,
    Traoptimal,
}

impl Display for RouteOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RouteOption::Trafast => "trafast",
                RouteOption::Tracomfort => "tracomfort",
                RouteOption::Traoptimal => "traoptimal",
            }
        )
    }
}

#[derive(Deserialize)]
struct DrivingResponse {
    code: Option<i64>,
    message: Option<String>,
    route: Option<HashMap<String, Vec<RouteCandidate>>>,
}

#[derive(Deserialize)]
struct RouteCandidate {
    summary: RouteSummary,

    /// Path as `[lng, lat]` pairs
    #[serde(default)]
    path: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct RouteSummary {
    /// Distance in meters
    distance: u64,

    /// Duration in milliseconds
    duration: u64,
}

pub struct NaverDirectionsClientParams {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    pub route_option: RouteOption,
    pub timeout: Duration,
}

pub struct NaverDirectionsClient {
    params: NaverDirectionsClientParams,
    client: reqwest::Client,
}

impl NaverDirectionsClient {
    pub fn new(params: NaverDirectionsClientParams) -> Result<Self, DirectionsError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;

        Ok(NaverDirectionsClient { params, client })
    }
}

impl DrivingDirections for NaverDirectionsClient {
    async fn driving_leg(&self, start: Waypoint, goal: Waypoint) -> Result<Leg, DirectionsError> {
        let option = self.params.route_option.to_string();

        let response = self
            .client
            .get(&self.params.base_url)
            .header(CLIENT_ID_HEADER, &self.params.client_id)
            .header(CLIENT_SECRET_HEADER, &self.params.client_secret)
            .query(&[
                ("start", format!("{},{}", start.lng, start.lat)),
                ("goal", format!("{},{}", goal.lng, goal.lat)),
                ("option", option.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api { status, message });
        }

        let driving: DrivingResponse = response.json().await?;

        if let Some(code) = driving.code {
            if code != 0 {
                return Err(DirectionsError::Service {
                    code,
                    message: driving.message.unwrap_or_default(),
                });
            }
        }

        let candidates = driving
            .route
            .and_then(|mut route| route.remove(&option))
            .unwrap_or_default();

        let best = candidates
            .into_iter()
            .min_by_key(|candidate| candidate.summary.distance)
            .ok_or(DirectionsError::NoRoute)?;

        debug!(
            "NaverDirectionsApi: leg of {} m in {} ms over {} path points",
            best.summary.distance,
            best.summary.duration,
            best.path.len()
        );

        let polyline = best
            .path
            .iter()
            .map(|&[lng, lat]| Waypoint { lat, lng })
            .collect();

        Ok(Leg {
            distance_meters: best.summary.distance,
            duration_seconds: best.summary.duration / 1000,
            polyline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: String) -> NaverDirectionsClient {
        NaverDirectionsClient::new(NaverDirectionsClientParams {
            client_id: "test-id".to_string(),
            client_secret: "test-secret".to_string(),
            base_url,
            route_option: RouteOption::Trafast,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn start() -> Waypoint {
        Waypoint::new(37.55, 126.97)
    }

    fn goal() -> Waypoint {
        Waypoint::new(37.56, 126.99)
    }

    #[tokio::test]
    async fn test_selects_min_distance_alternative() {
        let server = MockServer::start().await;

        let body = json!({
            "code": 0,
            "message": "success",
            "route": {
                "trafast": [
                    {
                        "summary": { "distance": 5000, "duration": 600000 },
                        "path": [[126.97, 37.55], [126.98, 37.555], [126.99, 37.56]]
                    },
                    {
                        "summary": { "distance": 4800, "duration": 720000 },
                        "path": [[126.97, 37.55], [126.99, 37.56]]
                    }
                ]
            }
        });

        Mock::given(method("GET"))
            .and(query_param("option", "trafast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let leg = test_client(server.uri())
            .driving_leg(start(), goal())
            .await
            .unwrap();

        assert_eq!(leg.distance_meters, 4800);
        assert_eq!(leg.duration_seconds, 720);
        assert_eq!(leg.polyline.len(), 2);
    }

    #[tokio::test]
    async fn test_sends_lng_lat_coordinates_and_credentials() {
        let server = MockServer::start().await;

        let body = json!({
            "code": 0,
            "route": {
                "trafast": [{
                    "summary": { "distance": 1200, "duration": 90000 },
                    "path": [[126.97, 37.55], [126.99, 37.56]]
                }]
            }
        });

        Mock::given(method("GET"))
            .and(query_param("start", "126.97,37.55"))
            .and(query_param("goal", "126.99,37.56"))
            .and(header(CLIENT_ID_HEADER, "test-id"))
            .and(header(CLIENT_SECRET_HEADER, "test-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let leg = test_client(server.uri())
            .driving_leg(start(), goal())
            .await
            .unwrap();

        assert_eq!(leg.distance_meters, 1200);
        assert_eq!(leg.duration_seconds, 90);
    }

    #[tokio::test]
    async fn test_decodes_path_pairs_as_lat_lng_waypoints() {
        let server = MockServer::start().await;

        let body = json!({
            "code": 0,
            "route": {
                "trafast": [{
                    "summary": { "distance": 1200, "duration": 90000 },
                    "path": [[126.97, 37.55], [126.98, 37.555], [126.99, 37.56]]
                }]
            }
        });

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let leg = test_client(server.uri())
            .driving_leg(start(), goal())
            .await
            .unwrap();

        assert_eq!(leg.polyline[1], Waypoint::new(37.555, 126.98));
    }

    #[tokio::test]
    async fn test_zero_alternatives_is_no_route() {
        let server = MockServer::start().await;

        let body = json!({
            "code": 0,
            "route": { "trafast": [] }
        });

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let error = test_client(server.uri())
            .driving_leg(start(), goal())
            .await
            .unwrap_err();

        assert!(matches!(error, DirectionsError::NoRoute));
    }

    #[tokio::test]
    async fn test_missing_route_section_is_no_route() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0 })))
            .mount(&server)
            .await;

        let error = test_client(server.uri())
            .driving_leg(start(), goal())
            .await
            .unwrap_err();

        assert!(matches!(error, DirectionsError::NoRoute));
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
            .mount(&server)
            .await;

        let error = test_client(server.uri())
            .driving_leg(start(), goal())
            .await
            .unwrap_err();

        match error {
            DirectionsError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream broke");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_zero_provider_code_is_service_error() {
        let server = MockServer::start().await;

        let body = json!({
            "code": 2,
            "message": "no route between points"
        });

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let error = test_client(server.uri())
            .driving_leg(start(), goal())
            .await
            .unwrap_err();

        match error {
            DirectionsError::Service { code, message } => {
                assert_eq!(code, 2);
                assert_eq!(message, "no route between points");
            }
            other => panic!("expected Service error, got {:?}", other),
        }
    }
}
