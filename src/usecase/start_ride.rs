use std::sync::Arc;

use uuid::Uuid;

use crate::{error::Error, repository::RideRepository};

pub struct StartRide {
    ride_repository: Arc<dyn RideRepository>,
}

impl StartRide {
    pub fn new(ride_repository: Arc<dyn RideRepository>) -> Self {
        Self { ride_repository }
    }

    #[tracing::instrument(name = "StartRide::execute", skip(self))]
    pub async fn execute(&self, ride_id: Uuid) -> Result<(), Error> {
        let mut ride = self.ride_repository.find_by_id(ride_id).await?;
        let expected = ride.status();

        ride.start()?;

        self.ride_repository.update(&ride, expected).await?;

        tracing::info!("ride started");

        Ok(())
    }
}
