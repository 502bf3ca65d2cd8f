use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use lunar_backend::{
    config::{get_config, init_config},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let api = Router::new()
        .route("/api/vacancies", post(routes::vacancy::create_vacancy))
        .route(
            "/api/vacancies/open",
            get(routes::vacancy::list_open_vacancies),
        )
        .route(
            "/api/vacancies/closed",
            get(routes::vacancy::list_closed_vacancies),
        )
        .route("/api/vacancies/:id", get(routes::vacancy::get_vacancy))
        .route(
            "/api/vacancies/:id/close",
            post(routes::vacancy::close_vacancy),
        )
        .route(
            "/api/vacancies/:id/summary",
            get(routes::vacancy::vacancy_summary),
        )
        .route(
            "/api/vacancies/:id/candidates",
            post(routes::candidate_routes::upload_vacancy_candidates),
        )
        .route(
            "/api/vacancies/:id/shortlist",
            post(routes::candidate_routes::shortlist_vacancy),
        )
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_pool)
                .post(routes::candidate_routes::upload_pool_candidates),
        )
        .route(
            "/api/candidates/shortlist",
            post(routes::candidate_routes::shortlist_pool),
        )
        .layer(axum::middleware::from_fn_with_state(
            lunar_backend::middleware::rate_limit::new_rps_state(config.api_rps),
            lunar_backend::middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
