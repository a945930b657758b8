//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(plan_route))
        .route("/stations", get(list_stations))
        .route("/lines", get(list_lines))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a route between two named stations.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    // An absent parameter and an empty one are the same case
    let from = req.from.as_deref().unwrap_or("");
    let to = req.to.as_deref().unwrap_or("");

    let plan = state.planner.plan(from, to)?;

    Ok(Json(RouteResponse::from_plan(&plan)))
}

/// List all known stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let mut stations: Vec<String> = state
        .planner
        .graph()
        .stations()
        .map(|s| s.as_str().to_string())
        .collect();
    stations.sort();

    Json(StationListResponse { stations })
}

/// List all lines with their stop sequences.
async fn list_lines(State(state): State<AppState>) -> Json<LineListResponse> {
    let lines = state
        .planner
        .registry()
        .lines()
        .iter()
        .map(|line| LineSummary {
            name: line.name().to_string(),
            stations: line.stations().iter().map(|s| s.as_str().to_string()).collect(),
        })
        .collect();

    Json(LineListResponse { lines })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::MissingParameter | PlanError::UnknownStation { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::NoRouteFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LineRegistry;
    use crate::planner::RoutePlanner;
    use crate::transfers::delhi_connections;

    fn test_state() -> AppState {
        let registry =
            LineRegistry::from_json_str(r#"{ "Red": ["A", "B", "C"], "Blue": ["C", "D"] }"#)
                .unwrap();
        AppState::new(RoutePlanner::new(registry, &delhi_connections()))
    }

    fn query(from: Option<&str>, to: Option<&str>) -> Query<RouteQuery> {
        Query(RouteQuery {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn plan_route_happy_path() {
        let result = plan_route(State(test_state()), query(Some("A"), Some("D"))).await;

        let Json(response) = result.unwrap();
        assert_eq!(response.route, vec!["A", "B", "C", "D"]);
        assert_eq!(response.stops, 3);
        assert_eq!(response.transfer_stations, vec!["C"]);
    }

    #[tokio::test]
    async fn absent_parameter_is_bad_request() {
        let result = plan_route(State(test_state()), query(None, Some("D"))).await;

        let err = result.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_station_is_bad_request() {
        let result = plan_route(State(test_state()), query(Some("A"), Some("Nowhere"))).await;

        let err = result.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn stations_are_sorted() {
        let Json(response) = list_stations(State(test_state())).await;

        assert_eq!(response.stations, vec!["A", "B", "C", "D"]);
    }

    #[tokio::test]
    async fn lines_keep_registry_order() {
        let Json(response) = list_lines(State(test_state())).await;

        let names: Vec<&str> = response.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Blue"]);
    }

    #[test]
    fn plan_errors_map_to_statuses() {
        let bad: AppError = PlanError::MissingParameter.into();
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let bad: AppError = PlanError::UnknownStation {
            name: "Q".to_string(),
        }
        .into();
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let missing: AppError = PlanError::NoRouteFound {
            from: "A".to_string(),
            to: "Y".to_string(),
        }
        .into();
        assert!(matches!(missing, AppError::NotFound { .. }));
    }
}
