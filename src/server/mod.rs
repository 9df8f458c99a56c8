mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::engine::Engine;
use crate::error::Error;
use crate::server::handlers::rides;

type DynEngine = Arc<Engine>;

pub fn router(engine: Engine) -> Router {
    let engine = Arc::new(engine) as DynEngine;

    Router::new()
        .route("/rides", post(rides::request))
        .route("/rides/:id", get(rides::find))
        .route("/rides/:id/accept", patch(rides::accept))
        .route("/rides/:id/start", patch(rides::start))
        .route("/rides/:id/positions", post(rides::update_position))
        .route("/rides/:id/finish", patch(rides::finish))
        .route("/rides/:id/cancel", patch(rides::cancel))
        .layer(Extension(engine))
}

pub async fn serve(engine: Engine, addr: SocketAddr) -> Result<(), Error> {
    let app = router(engine);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server stopped: {:?}", err);
            Error::unexpected_error()
        })
}
