//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, info, Level};

use crate::config::AppConfig;
use crate::error::EvaluationError;
use crate::metrics::Metrics;
use crate::models::market::{IndicatorMap, MarketSnapshot};
use crate::models::signal::{Evaluation, MarketCondition, PositionSizing, TradingSignal};
use crate::models::strategy::{StrategyType, TradingStrategy};
use crate::services::market_data::{InMemoryMarketData, MarketDataProvider};
use crate::signals::aggregation::SignalAggregator;
use crate::signals::alerts::{triggered_alerts, AlertTrigger, PriceAlert};
use crate::signals::analyzer::MarketAnalyzer;
use crate::signals::engine::SignalEngine;
use crate::signals::performance::PerformanceReport;
use crate::signals::sizing::PositionSizer;
use crate::strategies::StrategyRegistry;

pub const HEALTH_STATUS: &str = "healthy";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub engine: Arc<SignalEngine>,
    pub market_data: Arc<dyn MarketDataProvider>,
}

impl AppState {
    /// State backed by the given registry and an in-memory market cache
    pub fn new(registry: StrategyRegistry, metrics: Arc<Metrics>) -> Self {
        let engine = SignalEngine::new(Arc::new(registry), MarketAnalyzer::default())
            .with_metrics(metrics.clone());
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            engine: Arc::new(engine),
            market_data: Arc::new(InMemoryMarketData::new()),
        }
    }
}

/// Maps pipeline errors onto HTTP status codes with a JSON body
pub struct ApiError(EvaluationError);

impl From<EvaluationError> for ApiError {
    fn from(err: EvaluationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EvaluationError::StrategyNotFound(_) | EvaluationError::MarketDataUnavailable(_) => {
                StatusCode::NOT_FOUND
            }
            EvaluationError::InvalidInput(_)
            | EvaluationError::NoConditions { .. }
            | EvaluationError::InvalidStrategy(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EvaluationError::CatalogIo(_) | EvaluationError::CatalogFormat(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        debug!(status = %status, error = %self.0, "Request rejected");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": HEALTH_STATUS,
        "uptime_seconds": uptime_seconds,
        "service": "signaldesk"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct StrategyQuery {
    #[serde(rename = "type")]
    strategy_type: Option<StrategyType>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    price: f64,
    volume: f64,
    #[serde(default)]
    indicators: IndicatorMap,
}

#[derive(Debug, Deserialize)]
struct SignalRequest {
    conditions: Vec<MarketCondition>,
}

#[derive(Debug, Deserialize)]
struct PositionRequest {
    price: f64,
    balance: f64,
}

#[derive(Debug, Deserialize)]
struct EvaluateRequest {
    symbol: String,
    price: f64,
    volume: f64,
    #[serde(default)]
    indicators: IndicatorMap,
    balance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MarketEvaluateQuery {
    strategy: String,
    balance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PerformanceRequest {
    initial_capital: f64,
    profits: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct AlertCheckRequest {
    alerts: Vec<PriceAlert>,
}

fn find_strategy<'a>(state: &'a AppState, id: &str) -> Result<&'a TradingStrategy, ApiError> {
    state
        .engine
        .registry()
        .get_strategy_by_id(id)
        .ok_or_else(|| EvaluationError::StrategyNotFound(id.to_string()).into())
}

/// List strategies, optionally filtered by type
async fn list_strategies(
    State(state): State<AppState>,
    Query(params): Query<StrategyQuery>,
) -> Json<Vec<TradingStrategy>> {
    let registry = state.engine.registry();
    let strategies: Vec<TradingStrategy> = match params.strategy_type {
        Some(strategy_type) => registry.by_type(strategy_type).into_iter().cloned().collect(),
        None => registry.list().to_vec(),
    };
    Json(strategies)
}

async fn get_strategy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TradingStrategy> {
    Ok(Json(find_strategy(&state, &id)?.clone()))
}

async fn analyze_market(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Vec<MarketCondition>> {
    let strategy = find_strategy(&state, &id)?;
    let conditions = state.engine.analyzer().analyze(
        strategy,
        request.price,
        request.volume,
        &request.indicators,
    );
    Ok(Json(conditions))
}

async fn aggregate_signal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SignalRequest>,
) -> ApiResult<TradingSignal> {
    let strategy = find_strategy(&state, &id)?;
    let signal = SignalAggregator::aggregate(strategy, &request.conditions)?;
    state.metrics.record_signal(signal.signal);
    Ok(Json(signal))
}

async fn size_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PositionRequest>,
) -> ApiResult<PositionSizing> {
    let strategy = find_strategy(&state, &id)?;
    Ok(Json(PositionSizer::size(
        strategy,
        request.price,
        request.balance,
    )?))
}

async fn evaluate_strategy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EvaluateRequest>,
) -> ApiResult<Evaluation> {
    let mut snapshot = MarketSnapshot::new(request.symbol, request.price, request.volume);
    snapshot.indicators = request.indicators;
    Ok(Json(state.engine.evaluate(&id, &snapshot, request.balance)?))
}

/// Store the latest readings for a symbol
async fn publish_snapshot(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<StatusCode, ApiError> {
    let mut snapshot = MarketSnapshot::new(symbol, request.price, request.volume);
    snapshot.indicators = request.indicators;
    state.market_data.publish(snapshot).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Evaluate a strategy against the cached snapshot for a symbol
async fn evaluate_market(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<MarketEvaluateQuery>,
) -> ApiResult<Evaluation> {
    let snapshot = state.market_data.snapshot(&symbol).await?;
    Ok(Json(state.engine.evaluate(
        &params.strategy,
        &snapshot,
        params.balance,
    )?))
}

/// Check price alerts against the cached snapshot for a symbol
async fn check_alerts(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Json(request): Json<AlertCheckRequest>,
) -> ApiResult<Vec<AlertTrigger>> {
    let snapshot = state.market_data.snapshot(&symbol).await?;
    Ok(Json(triggered_alerts(&request.alerts, &snapshot)))
}

async fn performance_report(
    Json(request): Json<PerformanceRequest>,
) -> ApiResult<PerformanceReport> {
    Ok(Json(PerformanceReport::compute(
        request.initial_capital,
        &request.profits,
    )?))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/strategies", get(list_strategies))
        .route("/api/strategies/{id}", get(get_strategy))
        .route("/api/strategies/{id}/analyze", post(analyze_market))
        .route("/api/strategies/{id}/signal", post(aggregate_signal))
        .route("/api/strategies/{id}/position", post(size_position))
        .route("/api/strategies/{id}/evaluate", post(evaluate_strategy))
        .route("/api/markets/{symbol}", put(publish_snapshot))
        .route("/api/markets/{symbol}/evaluate", get(evaluate_market))
        .route("/api/markets/{symbol}/alerts", post(check_alerts))
        .route("/api/performance", post(performance_report))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    let registry = match &config.strategy_catalog_path {
        Some(path) => StrategyRegistry::from_json_file(path)?,
        None => StrategyRegistry::new(),
    };
    info!(strategies = registry.len(), "Strategy registry ready");

    let app = create_router(AppState::new(registry, metrics));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
