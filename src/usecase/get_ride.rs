use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{entities::Ride, error::Error, repository::RideRepository};

/// Read-only projection of a ride.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRideOutput {
    pub ride_id: Uuid,
    pub passenger_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub status: String,
    pub fare: f64,
    pub from_lat: f64,
    pub from_long: f64,
    pub to_lat: f64,
    pub to_long: f64,
    pub date: DateTime<Utc>,
}

impl From<&Ride> for GetRideOutput {
    fn from(ride: &Ride) -> Self {
        Self {
            ride_id: ride.id(),
            passenger_id: ride.passenger_id(),
            driver_id: ride.driver_id(),
            status: ride.status().name().to_string(),
            fare: ride.fare(),
            from_lat: ride.origin().lat(),
            from_long: ride.origin().long(),
            to_lat: ride.destination().lat(),
            to_long: ride.destination().long(),
            date: ride.date(),
        }
    }
}

pub struct GetRide {
    ride_repository: Arc<dyn RideRepository>,
}

impl GetRide {
    pub fn new(ride_repository: Arc<dyn RideRepository>) -> Self {
        Self { ride_repository }
    }

    #[tracing::instrument(name = "GetRide::execute", skip(self))]
    pub async fn execute(&self, ride_id: Uuid) -> Result<GetRideOutput, Error> {
        let ride = self.ride_repository.find_by_id(ride_id).await?;

        Ok(GetRideOutput::from(&ride))
    }
}
