use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entities::travelled_distance,
    error::Error,
    repository::{PositionRepository, RideRepository},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishRideOutput {
    pub ride_id: Uuid,
    /// Kilometres covered by the recorded positions.
    pub distance: f64,
}

pub struct FinishRide {
    ride_repository: Arc<dyn RideRepository>,
    position_repository: Arc<dyn PositionRepository>,
}

impl FinishRide {
    pub fn new(
        ride_repository: Arc<dyn RideRepository>,
        position_repository: Arc<dyn PositionRepository>,
    ) -> Self {
        Self {
            ride_repository,
            position_repository,
        }
    }

    /// Positions are read after `completed` is stored, so every position the
    /// store accepted while the ride was in progress is counted.
    #[tracing::instrument(name = "FinishRide::execute", skip(self))]
    pub async fn execute(&self, ride_id: Uuid) -> Result<FinishRideOutput, Error> {
        let mut ride = self.ride_repository.find_by_id(ride_id).await?;
        let expected = ride.status();

        ride.finish()?;

        self.ride_repository.update(&ride, expected).await?;

        let positions = self.position_repository.find_by_ride_id(ride_id).await?;
        let distance = travelled_distance(&positions);

        tracing::info!(distance, "ride finished");

        Ok(FinishRideOutput { ride_id, distance })
    }
}
