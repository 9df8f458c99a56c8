use async_trait::async_trait;
use futures::TryStreamExt;
use geo_types::Geometry;
use geozero::wkb;
use sqlx::{types::Json, Acquire, Executor, Pool, Postgres, Row};
use uuid::Uuid;

use super::{PositionRepository, RideRepository};
use crate::{
    entities::{Coordinates, Position, Ride, RideStatus},
    error::Error,
};

type Database = Postgres;

#[derive(Clone, Debug)]
pub struct PgRideRepository {
    pool: Pool<Database>,
}

impl PgRideRepository {
    pub fn new(pool: Pool<Database>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RideRepository for PgRideRepository {
    #[tracing::instrument(skip(self, ride), fields(ride_id = %ride.id()))]
    async fn save(&self, ride: &Ride) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO rides (id, status, data) VALUES ($1, $2, $3)")
                .bind(ride.id())
                .bind(ride.status().name())
                .bind(Json(ride)),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, ride), fields(ride_id = %ride.id()))]
    async fn update(&self, ride: &Ride, expected: RideStatus) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(
                sqlx::query(
                    "UPDATE rides SET status = $2, data = $3 WHERE id = $1 AND status = $4",
                )
                .bind(ride.id())
                .bind(ride.status().name())
                .bind(Json(ride))
                .bind(expected.name()),
            )
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!("ride is no longer {}, conditional update lost", expected);
            return Err(Error::invalid_status_error());
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Ride, Error> {
        let mut conn = self.pool.acquire().await?;

        let Json(ride): Json<Ride> = conn
            .fetch_optional(sqlx::query("SELECT data FROM rides WHERE id = $1").bind(id))
            .await?
            .ok_or_else(Error::ride_not_found_error)?
            .try_get("data")?;

        Ok(ride)
    }
}

#[derive(Clone, Debug)]
pub struct PgPositionRepository {
    pool: Pool<Database>,
}

impl PgPositionRepository {
    pub fn new(pool: Pool<Database>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PositionRepository for PgPositionRepository {
    #[tracing::instrument(skip(self))]
    async fn save(&self, position: &Position, expected: RideStatus) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        // FOR SHARE blocks the ride's conditional update until this commits
        let status: String = tx
            .fetch_optional(
                sqlx::query("SELECT status FROM rides WHERE id = $1 FOR SHARE")
                    .bind(position.ride_id),
            )
            .await?
            .ok_or_else(Error::ride_not_found_error)?
            .try_get("status")?;

        if status != expected.name() {
            tracing::warn!("ride is {}, position dropped", status);
            return Err(Error::invalid_status_error());
        }

        let location: Geometry<f64> = position.coordinates.into();

        tx.execute(
            sqlx::query(
                "INSERT INTO positions (id, ride_id, location, date) VALUES ($1, $2, ST_SetSRID($3, 4326), $4)",
            )
            .bind(position.id)
            .bind(position.ride_id)
            .bind(wkb::Encode(location))
            .bind(position.date),
        )
        .await?;

        tx.commit().await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_ride_id(&self, ride_id: Uuid) -> Result<Vec<Position>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(
            sqlx::query(
                "SELECT id, ride_id, location, date FROM positions WHERE ride_id = $1 ORDER BY date ASC",
            )
            .bind(ride_id),
        );

        let mut positions = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let location: wkb::Decode<Geometry<f64>> = row.try_get("location")?;
            let geometry = location
                .geometry
                .ok_or_else(Error::invalid_coordinates_error)?;

            positions.push(Position {
                id: row.try_get("id")?,
                ride_id: row.try_get("ride_id")?,
                coordinates: Coordinates::try_from(geometry)?,
                date: row.try_get("date")?,
            });
        }

        Ok(positions)
    }
}
