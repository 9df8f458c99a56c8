use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::Authorizor, entities::Ride, error::Error, gateway::AccountGateway,
    pricing::FarePolicy, repository::RideRepository,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRideInput {
    pub passenger_id: Uuid,
    pub from_lat: f64,
    pub from_long: f64,
    pub to_lat: f64,
    pub to_long: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRideOutput {
    pub ride_id: Uuid,
}

pub struct RequestRide {
    account_gateway: Arc<dyn AccountGateway>,
    ride_repository: Arc<dyn RideRepository>,
    authorizor: Authorizor,
    fare_policy: FarePolicy,
}

impl RequestRide {
    pub fn new(
        account_gateway: Arc<dyn AccountGateway>,
        ride_repository: Arc<dyn RideRepository>,
        authorizor: Authorizor,
        fare_policy: FarePolicy,
    ) -> Self {
        Self {
            account_gateway,
            ride_repository,
            authorizor,
            fare_policy,
        }
    }

    #[tracing::instrument(name = "RequestRide::execute", skip(self))]
    pub async fn execute(&self, input: RequestRideInput) -> Result<RequestRideOutput, Error> {
        let passenger = self
            .account_gateway
            .find_by_id(input.passenger_id)
            .await?
            .ok_or_else(Error::invalid_account_error)?;

        self.authorizor
            .authorize(passenger, "request_ride", "ride")?;

        let ride = Ride::create(
            input.passenger_id,
            input.from_lat,
            input.from_long,
            input.to_lat,
            input.to_long,
            &self.fare_policy,
        )?;

        self.ride_repository.save(&ride).await?;

        tracing::info!(
            ride_id = %ride.id(),
            distance = ride.distance(),
            fare = ride.fare(),
            "ride requested"
        );

        Ok(RequestRideOutput { ride_id: ride.id() })
    }
}
