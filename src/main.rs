use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod db;
mod error;
mod evaluations;
mod handlers;
mod models;
mod stats;
mod validations;

use auth::rate_limit::RateLimitState;
use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
    pub rate_limiter: RateLimitState,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fastlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    let config = Arc::new(config);

    // Database
    let db = db::create_pool(&config.database_url).await;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    let rate_limiter = RateLimitState::new();

    let state = AppState {
        db,
        config: config.clone(),
        rate_limiter,
    };

    // Auth routes with rate limiting
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
        // Daily fasting logs
        .route("/api/fastings", get(handlers::fastings::list_fastings))
        .route("/api/fastings", post(handlers::fastings::create_fasting))
        .route(
            "/api/fastings/by-date/:date",
            get(handlers::fastings::get_fasting_by_date),
        )
        .route("/api/fastings/:id", put(handlers::fastings::update_fasting))
        .route(
            "/api/fastings/:id",
            delete(handlers::fastings::delete_fasting),
        )
        // InBody measurements
        .route("/api/inbody", get(handlers::inbody::list_inbody))
        .route("/api/inbody", post(handlers::inbody::create_inbody))
        .route("/api/inbody/:id", get(handlers::inbody::get_inbody))
        .route("/api/inbody/:id", put(handlers::inbody::update_inbody))
        .route("/api/inbody/:id", delete(handlers::inbody::delete_inbody))
        // Period logs
        .route("/api/periods", get(handlers::periods::list_periods))
        .route("/api/periods", post(handlers::periods::create_period))
        .route("/api/periods/:id", put(handlers::periods::update_period))
        .route("/api/periods/:id", delete(handlers::periods::delete_period))
        // Bowel logs
        .route("/api/bowels", get(handlers::bowels::list_bowels))
        .route("/api/bowels", post(handlers::bowels::create_bowel))
        .route("/api/bowels/:id", put(handlers::bowels::update_bowel))
        .route("/api/bowels/:id", delete(handlers::bowels::delete_bowel))
        // Daily reviews
        .route("/api/reviews", get(handlers::reviews::list_reviews))
        .route("/api/reviews", post(handlers::reviews::upsert_review))
        .route("/api/reviews/:id", delete(handlers::reviews::delete_review))
        // Timestamped weights & charts
        .route("/api/weights", get(handlers::weights::list_weights))
        .route("/api/weights", post(handlers::weights::create_weight))
        .route("/api/weights/:id", put(handlers::weights::update_weight))
        .route("/api/weights/:id", delete(handlers::weights::delete_weight))
        .route(
            "/api/weights/daily-average",
            get(handlers::weights::get_daily_average),
        )
        .route("/api/weights/boxplot", get(handlers::weights::get_boxplot))
        // Meals
        .route("/api/meals", get(handlers::meals::list_meals))
        .route("/api/meals", post(handlers::meals::create_meal))
        .route("/api/meals/:id", put(handlers::meals::update_meal))
        .route("/api/meals/:id", delete(handlers::meals::delete_meal))
        // Conditions & presets
        .route("/api/conditions", get(handlers::conditions::list_conditions))
        .route(
            "/api/conditions",
            post(handlers::conditions::create_condition),
        )
        .route(
            "/api/conditions/:id",
            put(handlers::conditions::update_condition),
        )
        .route(
            "/api/conditions/:id",
            delete(handlers::conditions::delete_condition),
        )
        .route(
            "/api/condition-presets",
            get(handlers::presets::list_presets),
        )
        .route(
            "/api/condition-presets",
            post(handlers::presets::upsert_preset),
        )
        .route(
            "/api/condition-presets/:id",
            delete(handlers::presets::delete_preset),
        )
        // Calendar summary
        .route("/api/summary/daily", get(handlers::summary::get_daily_summary))
        // Auth actions requiring a session
        .route("/api/auth/logout", post(handlers::auth::logout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .unwrap()];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
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
        ])
        .allow_credentials(true);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    // Use into_make_service_with_connect_info to provide client IP for rate limiting
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .unwrap();
}
