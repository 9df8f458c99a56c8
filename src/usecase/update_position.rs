use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entities::{Coordinates, Position, RideStatus},
    error::Error,
    repository::{PositionRepository, RideRepository},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePositionInput {
    pub ride_id: Uuid,
    pub lat: f64,
    pub long: f64,
    pub date: DateTime<Utc>,
}

pub struct UpdatePosition {
    ride_repository: Arc<dyn RideRepository>,
    position_repository: Arc<dyn PositionRepository>,
}

impl UpdatePosition {
    pub fn new(
        ride_repository: Arc<dyn RideRepository>,
        position_repository: Arc<dyn PositionRepository>,
    ) -> Self {
        Self {
            ride_repository,
            position_repository,
        }
    }

    /// The position is written only while the stored ride is still
    /// `in_progress`; a ride finished in between fails with an invalid
    /// status error and nothing is stored.
    #[tracing::instrument(name = "UpdatePosition::execute", skip(self))]
    pub async fn execute(&self, input: UpdatePositionInput) -> Result<(), Error> {
        let coordinates = Coordinates::new(input.lat, input.long)?;

        let ride = self.ride_repository.find_by_id(input.ride_id).await?;

        if ride.status() != RideStatus::InProgress {
            tracing::info!("ride is {}, not tracking", ride.status());
            return Err(Error::invalid_status_error());
        }

        let position = Position::new(ride.id(), coordinates, input.date);

        self.position_repository
            .save(&position, RideStatus::InProgress)
            .await?;

        Ok(())
    }
}
