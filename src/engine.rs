use std::sync::Arc;

use crate::{
    auth::Authorizor,
    error::Error,
    gateway::AccountGateway,
    pricing::FarePolicy,
    repository::{PositionRepository, RideRepository},
    usecase::{
        AcceptRide, CancelRide, FinishRide, GetRide, RequestRide, StartRide, UpdatePosition,
    },
};

/// Every ride use case, wired to one set of collaborators.
pub struct Engine {
    pub request_ride: RequestRide,
    pub accept_ride: AcceptRide,
    pub get_ride: GetRide,
    pub start_ride: StartRide,
    pub update_position: UpdatePosition,
    pub finish_ride: FinishRide,
    pub cancel_ride: CancelRide,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(
        account_gateway: Arc<dyn AccountGateway>,
        ride_repository: Arc<dyn RideRepository>,
        position_repository: Arc<dyn PositionRepository>,
        fare_policy: FarePolicy,
    ) -> Result<Self, Error> {
        let authorizor = Authorizor::new()?;

        Ok(Self {
            request_ride: RequestRide::new(
                account_gateway.clone(),
                ride_repository.clone(),
                authorizor.clone(),
                fare_policy,
            ),
            accept_ride: AcceptRide::new(account_gateway, ride_repository.clone(), authorizor),
            get_ride: GetRide::new(ride_repository.clone()),
            start_ride: StartRide::new(ride_repository.clone()),
            update_position: UpdatePosition::new(
                ride_repository.clone(),
                position_repository.clone(),
            ),
            finish_ride: FinishRide::new(ride_repository.clone(), position_repository),
            cancel_ride: CancelRide::new(ride_repository),
        })
    }
}
