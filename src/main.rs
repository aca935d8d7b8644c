use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use hireflow_backend::{
    config::{get_config, init_config},
    middleware::cors::permissive_cors,
    routes,
    store::{postgres, seed, PgStore, Store},
    AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store: Arc<dyn Store> = match &config.database_url {
        Some(database_url) => {
            let pool = postgres::create_pool(database_url).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Using Postgres-backed store");
            Arc::new(PgStore::new(pool))
        }
        None => {
            info!("DATABASE_URL not set, using seeded in-memory store");
            Arc::new(seed::seeded_store().await)
        }
    };

    let app_state = AppState::new(store);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let api = Router::new()
        .route(
            "/api/jobs",
            get(routes::job_routes::list_jobs).post(routes::job_routes::create_job),
        )
        .route(
            "/api/jobs/:id",
            get(routes::job_routes::get_job)
                .patch(routes::job_routes::update_job)
                .delete(routes::job_routes::delete_job),
        )
        .route("/api/jobs/:id/screen", post(routes::job_routes::screen_job))
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates)
                .post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate)
                .patch(routes::candidate_routes::update_candidate)
                .delete(routes::candidate_routes::delete_candidate),
        )
        .route(
            "/api/interviews",
            get(routes::interview_routes::list_interviews),
        )
        .route(
            "/api/interviews/:id",
            get(routes::interview_routes::get_interview),
        )
        .route(
            "/api/interviews/schedule",
            post(routes::interview_routes::schedule_interviews),
        )
        .route(
            "/api/prescreen/schedule",
            post(routes::interview_routes::schedule_prescreens),
        )
        .route(
            "/api/emails/send",
            post(routes::template_routes::send_emails),
        )
        .route(
            "/api/email-templates",
            get(routes::template_routes::list_templates)
                .post(routes::template_routes::create_template),
        )
        .route(
            "/api/email-templates/:id",
            get(routes::template_routes::get_template)
                .patch(routes::template_routes::update_template)
                .delete(routes::template_routes::delete_template),
        )
        .route(
            "/api/external/jobs",
            get(routes::external::list_external_jobs),
        )
        .route(
            "/api/external/candidates",
            get(routes::external::list_external_candidates),
        )
        .layer(axum::middleware::from_fn_with_state(
            hireflow_backend::middleware::rate_limit::new_rps_state(config.api_rps),
            hireflow_backend::middleware::rate_limit::rps_middleware,
        ));

    let webhook = Router::new()
        .route(
            "/webhook/submit-application",
            post(routes::webhook_proxy::submit_application),
        )
        .route(
            "/webhook/test-proxy",
            get(routes::webhook_proxy::test_proxy),
        )
        .layer(axum::middleware::from_fn_with_state(
            hireflow_backend::middleware::rate_limit::new_rps_state(config.webhook_rps),
            hireflow_backend::middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(api)
        .merge(webhook)
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
