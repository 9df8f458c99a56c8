use std::sync::Arc;

use rideline::config::Config;
use rideline::db::PgPool;
use rideline::engine::Engine;
use rideline::error::Error;
use rideline::gateway::HttpAccountGateway;
use rideline::repository::{PgPositionRepository, PgRideRepository};
use rideline::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let pg_pool = PgPool::new(&config.database_url, config.max_connections).await?;
    pg_pool.migrate().await?;

    let PgPool(pool) = pg_pool;

    let engine = Engine::new(
        Arc::new(HttpAccountGateway::new(config.account_service_url.clone())),
        Arc::new(PgRideRepository::new(pool.clone())),
        Arc::new(PgPositionRepository::new(pool)),
        config.fare_policy,
    )?;

    serve(engine, config.listen_addr).await
}
