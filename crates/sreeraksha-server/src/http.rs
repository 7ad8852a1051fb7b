use crate::error::ApiError;
use crate::snapshot::DashboardSnapshot;
use crate::state::AppState;
use crate::static_ui;
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use sreeraksha_core::map::{marker_style, MarkerPosition, MarkerStyle};
use sreeraksha_core::types::{AlertFrequencyBucket, CameraFeed, CameraLocation, DistressAlert};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapCamera {
    #[serde(flatten)]
    camera: CameraLocation,
    position: MarkerPosition,
    style: MarkerStyle,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/feeds", get(feeds_handler))
        .route("/feeds/:id", get(feed_handler))
        .route("/alerts", get(alerts_handler))
        .route("/alerts/frequency", get(frequency_handler))
        .route("/cameras/map", get(map_handler))
        .route("/cameras/:id", get(camera_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(static_ui::UI_HTML)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.overall_health())
}

async fn dashboard_handler(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(DashboardSnapshot::from_state(&state).await)
}

async fn feeds_handler(State(state): State<AppState>) -> Json<Vec<CameraFeed>> {
    Json(state.registry.feeds().to_vec())
}

async fn feed_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CameraFeed>, ApiError> {
    let feed = state.registry.feed(&id)?;
    Ok(Json(feed.clone()))
}

async fn alerts_handler(State(state): State<AppState>) -> Json<Vec<DistressAlert>> {
    Json(state.registry.alerts().to_vec())
}

async fn frequency_handler(State(state): State<AppState>) -> Json<Vec<AlertFrequencyBucket>> {
    Json(state.registry.frequency().to_vec())
}

async fn map_handler(State(state): State<AppState>) -> Json<Vec<MapCamera>> {
    let cameras = state
        .registry
        .locations()
        .iter()
        .enumerate()
        .map(|(i, c)| map_camera(&state, i, c))
        .collect();
    Json(cameras)
}

fn map_camera(state: &AppState, index: usize, camera: &CameraLocation) -> MapCamera {
    MapCamera {
        camera: camera.clone(),
        position: state.layout.place(index, camera),
        style: marker_style(camera.status, camera.alert_level),
    }
}

async fn camera_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MapCamera>, ApiError> {
    let (index, camera) = state.registry.location(&id)?;
    Ok(Json(map_camera(&state, index, camera)))
}

async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let handle = state.prometheus.as_ref().ok_or(ApiError::MetricsUnavailable)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sreeraksha_core::simulate::TimerKind;
    use sreeraksha_core::types::{AlertStatus, AlertType, GestureType, Quality};
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = router(AppState::default());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_typed<T: serde::de::DeserializeOwned>(uri: &str) -> T {
        let app = router(AppState::default());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_feeds_listing() {
        let feeds: Vec<CameraFeed> = get_typed("/feeds").await;
        assert_eq!(feeds.len(), 6);
        assert_eq!(feeds[5].alert_type, Some(AlertType::Emergency));
        assert_eq!(feeds[1].quality, Quality::Hd);
        assert!(feeds[1].alert_type.is_none());
    }

    #[tokio::test]
    async fn test_feed_lookup() {
        let feed: CameraFeed = get_typed("/feeds/4").await;
        assert_eq!(feed.name, "Shopping Complex Cam-04");
        assert_eq!(feed.alert_type, Some(AlertType::Suspicious));

        let (status, body) = get_json("/feeds/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("99"));
    }

    #[tokio::test]
    async fn test_alerts_and_frequency() {
        let alerts: Vec<DistressAlert> = get_typed("/alerts").await;
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].gesture_type, GestureType::HelpSignal);
        assert_eq!(alerts[1].status, AlertStatus::Acknowledged);

        let buckets: Vec<AlertFrequencyBucket> = get_typed("/alerts/frequency").await;
        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[5].hour, "20:00");
        assert_eq!(buckets[5].alerts, 15);
        assert!(buckets.iter().all(|b| b.is_consistent()));
    }

    #[tokio::test]
    async fn test_camera_lookup() {
        let camera: CameraLocation = get_typed("/cameras/6").await;
        assert_eq!(camera.name, "Central Park Area");

        let (_, body) = get_json("/cameras/6").await;
        assert_eq!(body["style"]["pulsing"], true);
        assert_eq!(body["position"]["leftPct"], 35.0);

        let (status, body) = get_json("/cameras/CAM404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("CAM404"));
    }

    #[tokio::test]
    async fn test_map_markers() {
        let (_, body) = get_json("/cameras/map").await;
        let cameras = body.as_array().unwrap();
        assert_eq!(cameras.len(), 8);
        assert_eq!(cameras[0]["name"], "Main Street Junction");
        assert_eq!(cameras[0]["style"]["pulsing"], true);
        assert_eq!(cameras[2]["style"]["tone"], "slate");
        assert_eq!(cameras[7]["position"]["leftPct"], 75.0);
    }

    #[tokio::test]
    async fn test_dashboard_and_health() {
        let (status, body) = get_json("/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["network"]["onlineCameras"], 21);
        assert_eq!(body["chart"]["systemUptimePct"], 98.2);

        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn test_metrics_without_exporter() {
        let (status, body) = get_json("/metrics").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_metrics_render_recorded_counters() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        ::metrics::with_local_recorder(&recorder, || {
            crate::metrics::record_modal_open("4");
            crate::metrics::record_timer_tick(TimerKind::ClockTick);
        });

        let app = router(AppState::default().with_prometheus(handle));
        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("feed_modal_opens_total{feed=\"4\"} 1"), "{}", text);
        assert!(text.contains("timer_ticks_total{timer=\"clock_tick\"} 1"), "{}", text);
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let app = router(AppState::default());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("SreeRaksha"));
    }
}
