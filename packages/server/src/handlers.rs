//! HTTP handler functions for the narration API.

use actix_web::{HttpResponse, web};

use access_map_narrator::narrate;
use access_map_server_models::{
    ApiBoundary, ApiDataset, ApiHealth, ApiNarration, BoundaryQuery, LogAck, NarrationQuery,
};
use access_map_trends_models::CONTINENTAL_US;
use access_map_viewer::InteractionEvent;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/datasets`
///
/// Lists the configured datasets.
pub async fn datasets(state: web::Data<AppState>) -> HttpResponse {
    let listing: Vec<ApiDataset> = state.datasets.iter().map(ApiDataset::from).collect();
    HttpResponse::Ok().json(listing)
}

/// `GET /api/narration`
///
/// Fetches the trends payload for the viewport from the upstream
/// statistics service and narrates it with the requested dataset's
/// configuration. The viewport is clamped to the continental-US display
/// bounds and the geographic level is resolved from the dataset's zoom
/// thresholds before the upstream call.
pub async fn narration(
    state: web::Data<AppState>,
    params: web::Query<NarrationQuery>,
) -> HttpResponse {
    let Some(dataset) = state.find_dataset(&params.dataset) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "Unknown dataset"
        }));
    };

    let viewport = params.viewport().clamp(&CONTINENTAL_US);
    let level = dataset.thresholds.resolve(params.zoom);

    match state
        .stats
        .stats_in_view(viewport, params.zoom, &dataset.value_column)
        .await
    {
        Ok(payload) => {
            let result = narrate(&payload, level, &dataset.label, dataset.vocabulary, |value| {
                dataset.format.render(value)
            });
            HttpResponse::Ok().json(ApiNarration::from_result(result, level))
        }
        Err(e) => {
            log::error!("Failed to fetch trends for dataset {}: {e}", dataset.id);
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Failed to load trend information"
            }))
        }
    }
}

/// `GET /api/boundary`
///
/// Passes through the upstream boundary description for the viewport.
pub async fn boundary(
    state: web::Data<AppState>,
    params: web::Query<BoundaryQuery>,
) -> HttpResponse {
    let viewport = params.viewport().clamp(&CONTINENTAL_US);

    match state.stats.reverse_geocode(viewport, params.zoom).await {
        Ok(response) => HttpResponse::Ok().json(ApiBoundary { response }),
        Err(e) => {
            log::error!("Failed to fetch boundary description: {e}");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Failed to retrieve boundary information"
            }))
        }
    }
}

/// `POST /api/log`
///
/// Emits an interaction event through the logging facade. Events are not
/// stored; the endpoint exists so deployments can collect them from the
/// process logs.
pub async fn log_event(event: web::Json<InteractionEvent>) -> HttpResponse {
    let event = event.into_inner();
    log::info!(
        "interaction user={} session={} key={} zoom={} center=({}, {})",
        event.user_id,
        event.session_id,
        event.key_stroke,
        event.zoom_level,
        event.lng,
        event.lat,
    );
    HttpResponse::Ok().json(LogAck {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;
    use std::sync::Arc;

    use access_map_client::{CenterLocation, ClientError, StatsService};
    use access_map_trends_models::{
        Extremum, RegionKey, TrendEntry, TrendsPayload, Viewport,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use async_trait::async_trait;

    /// Serves a fixed payload, recording nothing.
    struct FixedStats {
        payload: TrendsPayload,
    }

    #[async_trait]
    impl StatsService for FixedStats {
        async fn stats_in_view(
            &self,
            _viewport: Viewport,
            _zoom: f64,
            _value_column: &str,
        ) -> Result<TrendsPayload, ClientError> {
            Ok(self.payload.clone())
        }

        async fn reverse_geocode(
            &self,
            _viewport: Viewport,
            _zoom: f64,
        ) -> Result<String, ClientError> {
            Ok("King County, Washington".to_string())
        }

        async fn locate_center(
            &self,
            _lat: f64,
            _lon: f64,
            _zoom: f64,
        ) -> Result<CenterLocation, ClientError> {
            Ok(CenterLocation {
                state: "Washington".to_string(),
                county: Some("King County".to_string()),
            })
        }
    }

    /// Fails every call.
    struct FailingStats;

    #[async_trait]
    impl StatsService for FailingStats {
        async fn stats_in_view(
            &self,
            _viewport: Viewport,
            _zoom: f64,
            _value_column: &str,
        ) -> Result<TrendsPayload, ClientError> {
            Err(ClientError::MissingField { field: "trends" })
        }

        async fn reverse_geocode(
            &self,
            _viewport: Viewport,
            _zoom: f64,
        ) -> Result<String, ClientError> {
            Err(ClientError::MissingField { field: "response" })
        }

        async fn locate_center(
            &self,
            _lat: f64,
            _lon: f64,
            _zoom: f64,
        ) -> Result<CenterLocation, ClientError> {
            Err(ClientError::MissingField { field: "state" })
        }
    }

    fn sample_payload() -> TrendsPayload {
        let mut trends = BTreeMap::new();
        trends.insert(
            RegionKey::Nw,
            TrendEntry {
                high: vec!["NW".to_string()],
                low: Vec::new(),
            },
        );
        TrendsPayload {
            trends,
            min: Some(Extremum {
                text: "Ohio".to_string(),
                value: 0.02,
                section: None,
            }),
            max: Some(Extremum {
                text: "Texas".to_string(),
                value: 0.31,
                section: None,
            }),
            average: Some(0.15),
            geocode: Some("the continental United States".to_string()),
        }
    }

    fn app_state(stats: Arc<dyn StatsService>) -> web::Data<AppState> {
        web::Data::new(AppState::new(stats))
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .service(
                        web::scope("/api")
                            .route("/health", web::get().to(health))
                            .route("/datasets", web::get().to(datasets))
                            .route("/narration", web::get().to(narration))
                            .route("/boundary", web::get().to(boundary))
                            .route("/log", web::post().to(log_event)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_reports_healthy() {
        let state = app_state(Arc::new(FixedStats {
            payload: sample_payload(),
        }));
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: ApiHealth = test::call_and_read_body_json(&app, req).await;
        assert!(body.healthy);
        assert!(!body.version.is_empty());
    }

    #[actix_web::test]
    async fn datasets_lists_the_registry() {
        let state = app_state(Arc::new(FixedStats {
            payload: sample_payload(),
        }));
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/datasets").to_request();
        let body: Vec<ApiDataset> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 4);
        assert!(body.iter().any(|d| d.id == "walk"));
    }

    #[actix_web::test]
    async fn narration_narrates_a_known_dataset() {
        let state = app_state(Arc::new(FixedStats {
            payload: sample_payload(),
        }));
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri(
                "/api/narration?screenLeft=-128&screenRight=-64&screenTop=52\
                 &screenBottom=22&zoom=4&dataset=walk",
            )
            .to_request();
        let body: ApiNarration = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.level, access_map_trends_models::GeoLevel::State);
        assert!(body.trend.contains("is high in the top-left."));
        assert!(body.trend.contains("The average"));
        assert_eq!(body.geocode, "the continental United States");
    }

    #[actix_web::test]
    async fn narration_resolves_level_from_dataset_thresholds() {
        let state = app_state(Arc::new(FixedStats {
            payload: sample_payload(),
        }));
        let app = test_app!(state);

        // Zoom 6 is county level for the walk dataset (threshold 6.0).
        let req = test::TestRequest::get()
            .uri(
                "/api/narration?screenLeft=-128&screenRight=-64&screenTop=52\
                 &screenBottom=22&zoom=6&dataset=walk",
            )
            .to_request();
        let body: ApiNarration = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.level, access_map_trends_models::GeoLevel::County);
        assert!(body.trend.contains("The county with the highest"));
    }

    #[actix_web::test]
    async fn narration_rejects_unknown_dataset() {
        let state = app_state(Arc::new(FixedStats {
            payload: sample_payload(),
        }));
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri(
                "/api/narration?screenLeft=-128&screenRight=-64&screenTop=52\
                 &screenBottom=22&zoom=4&dataset=crime",
            )
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn narration_maps_upstream_failure_to_bad_gateway() {
        let state = app_state(Arc::new(FailingStats));
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri(
                "/api/narration?screenLeft=-128&screenRight=-64&screenTop=52\
                 &screenBottom=22&zoom=4&dataset=walk",
            )
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn boundary_passes_the_description_through() {
        let state = app_state(Arc::new(FixedStats {
            payload: sample_payload(),
        }));
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri(
                "/api/boundary?screenLeft=-125&screenRight=-120&screenTop=48\
                 &screenBottom=45&zoom=7",
            )
            .to_request();
        let body: ApiBoundary = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.response, "King County, Washington");
    }

    #[actix_web::test]
    async fn boundary_maps_upstream_failure_to_bad_gateway() {
        let state = app_state(Arc::new(FailingStats));
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri(
                "/api/boundary?screenLeft=-125&screenRight=-120&screenTop=48\
                 &screenBottom=45&zoom=7",
            )
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn log_acknowledges_the_event() {
        let state = app_state(Arc::new(FixedStats {
            payload: sample_payload(),
        }));
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/log")
            .set_json(serde_json::json!({
                "user_id": "user101",
                "session_id": "5b3b2a1c",
                "timestamp": "2024-03-01T17:20:00Z",
                "key_stroke": "i",
                "zoom_level": 6.2,
                "lng": -122.33,
                "lat": 47.61,
                "stats": "<p>Information is loading...</p>"
            }))
            .to_request();
        let body: LogAck = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "ok");
    }
}
