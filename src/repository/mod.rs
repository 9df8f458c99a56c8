//! Storage boundary for rides and tracked positions.
//!
//! Repositories only persist and retrieve; every business state change goes
//! through [`Ride`] first.

mod memory;
mod postgres;

pub use memory::{InMemoryPositionRepository, InMemoryRideRepository};
pub use postgres::{PgPositionRepository, PgRideRepository};

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Position, Ride, RideStatus};
use crate::error::Error;

#[async_trait]
pub trait RideRepository: Send + Sync {
    /// Inserts a newly created ride.
    async fn save(&self, ride: &Ride) -> Result<(), Error>;

    /// Conditional write: stores `ride` only if the stored status still
    /// equals `expected`. A lost race fails with an invalid status error and
    /// leaves the stored row untouched.
    async fn update(&self, ride: &Ride, expected: RideStatus) -> Result<(), Error>;

    /// Fails with a ride not found error when no ride has this id.
    async fn find_by_id(&self, id: Uuid) -> Result<Ride, Error>;
}

#[async_trait]
pub trait PositionRepository: Send + Sync {
    /// Conditional write: stores `position` only while its ride is stored
    /// with status `expected`, and holds off status changes of that ride
    /// until the position is written.
    async fn save(&self, position: &Position, expected: RideStatus) -> Result<(), Error>;

    /// Positions of a ride ordered by date, oldest first.
    async fn find_by_ride_id(&self, ride_id: Uuid) -> Result<Vec<Position>, Error>;
}
