use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::Authorizor, entities::RideStatus, error::Error, gateway::AccountGateway,
    repository::RideRepository,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRideInput {
    pub ride_id: Uuid,
    pub driver_id: Uuid,
}

pub struct AcceptRide {
    account_gateway: Arc<dyn AccountGateway>,
    ride_repository: Arc<dyn RideRepository>,
    authorizor: Authorizor,
}

impl AcceptRide {
    pub fn new(
        account_gateway: Arc<dyn AccountGateway>,
        ride_repository: Arc<dyn RideRepository>,
        authorizor: Authorizor,
    ) -> Self {
        Self {
            account_gateway,
            ride_repository,
            authorizor,
        }
    }

    /// Exactly one concurrent caller wins: the write is conditional on the
    /// stored ride still being `requested`, so a caller that loaded a stale
    /// copy gets an invalid status error and nothing is written.
    #[tracing::instrument(name = "AcceptRide::execute", skip(self))]
    pub async fn execute(&self, input: AcceptRideInput) -> Result<(), Error> {
        let driver = self
            .account_gateway
            .find_by_id(input.driver_id)
            .await?
            .ok_or_else(Error::invalid_account_error)?;

        self.authorizor.authorize(driver, "accept_ride", "ride")?;

        let mut ride = self.ride_repository.find_by_id(input.ride_id).await?;

        ride.accept(input.driver_id)?;

        self.ride_repository
            .update(&ride, RideStatus::Requested)
            .await?;

        tracing::info!("ride accepted");

        Ok(())
    }
}
