use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod db;
mod engine;
mod error;
mod handlers;
mod ml;
mod models;

use auth::rate_limit::RateLimitState;
use config::Config;
use engine::analysis::AnalysisEngine;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
    pub engine: AnalysisEngine,
    pub rate_limiter: RateLimitState,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindbalance_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    // Database + migrations
    let db = db::init(&config.database_url).await;

    // Train the statistical model before accepting any request. A missing or
    // empty training file degrades to rule-based generation; a broken one is
    // fatal; there is no retrain-later path.
    let model = ml::WeeklyModel::load(&config.training_data_path)
        .expect("Failed to initialize weekly analysis model");

    let analysis_engine = AnalysisEngine::new(
        model,
        Duration::from_millis(config.model_inference_timeout_ms),
    );

    let rate_limiter = RateLimitState::new();

    let state = AppState {
        db,
        config: config.clone(),
        engine: analysis_engine,
        rate_limiter,
    };

    // Credential endpoints sit behind the IP rate limiter
    let auth_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/refresh", post(handlers::auth::refresh))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::rate_limit::rate_limit_auth,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(auth_routes);

    let protected_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Check-ins
        .route("/api/checkins", get(handlers::checkins::list_checkins))
        .route("/api/checkins", post(handlers::checkins::create_checkin))
        .route("/api/checkins/:id", get(handlers::checkins::get_checkin))
        .route("/api/checkins/:id", put(handlers::checkins::update_checkin))
        .route(
            "/api/checkins/:id",
            delete(handlers::checkins::delete_checkin),
        )
        // Weekly analyses
        .route("/api/analyses", get(handlers::analyses::list_analyses))
        .route(
            "/api/analyses/generate",
            post(handlers::analyses::generate_analysis),
        )
        .route("/api/analyses/:id", get(handlers::analyses::get_analysis))
        .route(
            "/api/analyses/:id",
            delete(handlers::analyses::delete_analysis),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .frontend_url
                .parse::<axum::http::HeaderValue>()
                .expect("FRONTEND_URL must be a valid origin"),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    // connect-info provides the client IP the rate limiter keys on
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .expect("Server error");
}
