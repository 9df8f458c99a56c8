use std::sync::Arc;

use uuid::Uuid;

use crate::{error::Error, repository::RideRepository};

pub struct CancelRide {
    ride_repository: Arc<dyn RideRepository>,
}

impl CancelRide {
    pub fn new(ride_repository: Arc<dyn RideRepository>) -> Self {
        Self { ride_repository }
    }

    /// Cancellation is a status change; the ride row is kept.
    #[tracing::instrument(name = "CancelRide::execute", skip(self))]
    pub async fn execute(&self, ride_id: Uuid) -> Result<(), Error> {
        let mut ride = self.ride_repository.find_by_id(ride_id).await?;
        let expected = ride.status();

        ride.cancel()?;

        self.ride_repository.update(&ride, expected).await?;

        tracing::info!(previous = %expected, "ride cancelled");

        Ok(())
    }
}
