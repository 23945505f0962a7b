use crate::cli::ServeArgs;
use crate::infra::{load_dataset, AppState};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use team_match::config::AppConfig;
use team_match::error::AppError;
use team_match::recommendation::TeamRecommendationService;
use team_match::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(dir) = args.dataset_dir.take() {
        config.data.dataset_dir = Some(dir);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let dataset = Arc::new(load_dataset(config.data.dataset_dir.as_deref())?);
    let service = Arc::new(TeamRecommendationService::new(
        dataset.clone(),
        dataset,
        config.scoring.clone(),
    ));

    let app = with_recommendation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "team recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
