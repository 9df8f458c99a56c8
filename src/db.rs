use sqlx::{postgres::PgPoolOptions, Executor, Pool, Postgres};

use crate::error::Error;

pub struct PgPool(pub Pool<Postgres>);

impl PgPool {
    #[tracing::instrument(name = "PgPool::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Ok(Self(pool))
    }

    /// Creates the ride and position tables when missing.
    #[tracing::instrument(skip(self))]
    pub async fn migrate(&self) -> Result<(), Error> {
        let PgPool(pool) = self;

        pool.execute("CREATE EXTENSION IF NOT EXISTS postgis")
            .await?;

        pool.execute("CREATE TABLE IF NOT EXISTS rides (id UUID PRIMARY KEY, status VARCHAR NOT NULL, data JSONB NOT NULL)")
            .await?;

        pool.execute("CREATE TABLE IF NOT EXISTS positions (id UUID PRIMARY KEY, ride_id UUID NOT NULL, location geometry(Point, 4326) NOT NULL, date TIMESTAMPTZ NOT NULL, CONSTRAINT fk_position_ride FOREIGN KEY(ride_id) REFERENCES rides(id))")
            .await?;

        pool.execute("CREATE INDEX IF NOT EXISTS positions_ride_id_date ON positions (ride_id, date)")
            .await?;

        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.0.close().await;
    }
}
