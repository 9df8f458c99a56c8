use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PositionRepository, RideRepository};
use crate::{
    entities::{Position, Ride, RideStatus},
    error::Error,
};

/// In-process ride store.
///
/// Every write takes the single write lock, so the status comparison in
/// `update` and the write that follows it are atomic.
#[derive(Debug, Default)]
pub struct InMemoryRideRepository {
    rides: RwLock<HashMap<Uuid, Ride>>,
}

impl InMemoryRideRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RideRepository for InMemoryRideRepository {
    #[tracing::instrument(skip(self, ride), fields(ride_id = %ride.id()))]
    async fn save(&self, ride: &Ride) -> Result<(), Error> {
        let mut rides = self.rides.write().await;

        if rides.contains_key(&ride.id()) {
            return Err(Error::persistence_error("duplicate ride id"));
        }

        rides.insert(ride.id(), ride.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self, ride), fields(ride_id = %ride.id()))]
    async fn update(&self, ride: &Ride, expected: RideStatus) -> Result<(), Error> {
        let mut rides = self.rides.write().await;

        let stored = rides
            .get_mut(&ride.id())
            .ok_or_else(Error::ride_not_found_error)?;

        if stored.status() != expected {
            tracing::warn!("ride is no longer {}, conditional update lost", expected);
            return Err(Error::invalid_status_error());
        }

        *stored = ride.clone();
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Ride, Error> {
        self.rides
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(Error::ride_not_found_error)
    }
}

/// In-process position store checking ride status against `rides`.
///
/// `save` holds the rides read lock until the position is pushed, so a ride
/// update (which needs the write lock) cannot land between the status check
/// and the write.
#[derive(Debug)]
pub struct InMemoryPositionRepository {
    rides: Arc<InMemoryRideRepository>,
    positions: RwLock<Vec<Position>>,
}

impl InMemoryPositionRepository {
    pub fn new(rides: Arc<InMemoryRideRepository>) -> Self {
        Self {
            rides,
            positions: RwLock::default(),
        }
    }
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    #[tracing::instrument(skip(self))]
    async fn save(&self, position: &Position, expected: RideStatus) -> Result<(), Error> {
        let rides = self.rides.rides.read().await;

        let status = rides
            .get(&position.ride_id)
            .map(Ride::status)
            .ok_or_else(Error::ride_not_found_error)?;

        if status != expected {
            tracing::warn!("ride is {}, position dropped", status);
            return Err(Error::invalid_status_error());
        }

        self.positions.write().await.push(position.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_ride_id(&self, ride_id: Uuid) -> Result<Vec<Position>, Error> {
        let mut positions: Vec<Position> = self
            .positions
            .read()
            .await
            .iter()
            .filter(|p| p.ride_id == ride_id)
            .cloned()
            .collect();

        positions.sort_by_key(|p| p.date);
        Ok(positions)
    }
}
