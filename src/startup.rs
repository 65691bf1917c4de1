use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    routing::get,
    serve::Serve,
    Router,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse};
use tracing::Level;

use crate::{
    appstate::AppState,
    configuration::{DatabaseSettings, Settings},
    routes::{
        create_newsletter, delete_newsletter, get_newsletter, health_check, index,
        list_newsletters, not_found, patch_newsletter,
    },
};

pub struct Application {
    port: u16,
    db_pool: SqlitePool,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    pub async fn build(configuration: &Settings) -> anyhow::Result<Self> {
        let db_pool = get_connection_pool(&configuration.database);
        sqlx::migrate!("./migrations").run(&db_pool).await?;

        let addr = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        let server = run(listener, db_pool.clone());

        Ok(Self {
            port,
            db_pool,
            server,
        })
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db_pool(&self) -> &SqlitePool {
        &self.db_pool
    }
}

pub fn get_connection_pool(config: &DatabaseSettings) -> SqlitePool {
    SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(config.connect_options())
}

pub fn run(listener: TcpListener, db_pool: SqlitePool) -> Serve<TcpListener, Router, Router> {
    let app = Router::new()
        .route("/", get(index))
        .route("/health_check", get(health_check))
        .route(
            "/newsletters",
            get(list_newsletters).post(create_newsletter),
        )
        .route(
            "/newsletters/{id}",
            get(get_newsletter)
                .patch(patch_newsletter)
                .delete(delete_newsletter),
        )
        .fallback(not_found)
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(default_span)
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new())
                .on_failure(DefaultOnFailure::new()),
        )
        .with_state(AppState { db_pool });

    axum::serve(listener, app)
}

fn default_span(request: &Request<Body>) -> tracing::Span {
    let request_id = uuid::Uuid::new_v4();
    tracing::span!(
        Level::DEBUG,
        "request",
        method = tracing::field::display(request.method()),
        uri = tracing::field::display(request.uri()),
        version = tracing::field::debug(request.version()),
        request_id = tracing::field::display(request_id),
    )
}
