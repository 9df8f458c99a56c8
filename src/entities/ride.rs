use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;
use crate::error::Error;
use crate::pricing::FarePolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Requested,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether the lifecycle has an edge from `self` to `next`.
    pub fn can_transition_to(&self, next: Status) -> bool {
        matches!(
            (self, next),
            (Self::Requested, Self::Accepted)
                | (Self::Requested, Self::Cancelled)
                | (Self::Accepted, Self::InProgress)
                | (Self::Accepted, Self::Cancelled)
                | (Self::InProgress, Self::Completed)
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(Self::Requested),
            "accepted" => Ok(Self::Accepted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(Error::invalid_input_error(format!("unknown status {}", s))),
        }
    }
}

/// A single booking from request to completion or cancellation.
///
/// All state changes go through the methods below; each one checks the
/// lifecycle edge first and returns an invalid status error instead of
/// silently doing nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    id: Uuid,
    passenger_id: Uuid,
    driver_id: Option<Uuid>,
    status: Status,
    origin: Coordinates,
    destination: Coordinates,
    fare: f64,
    date: DateTime<Utc>,
}

impl Ride {
    pub fn create(
        passenger_id: Uuid,
        from_lat: f64,
        from_long: f64,
        to_lat: f64,
        to_long: f64,
        fare_policy: &FarePolicy,
    ) -> Result<Self, Error> {
        let origin = Coordinates::new(from_lat, from_long)?;
        let destination = Coordinates::new(to_lat, to_long)?;

        let distance = origin.distance_to(&destination);
        if distance <= 0.0 {
            return Err(Error::invalid_route_error());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            passenger_id,
            driver_id: None,
            status: Status::Requested,
            origin,
            destination,
            fare: fare_policy.fare(distance),
            date: Utc::now(),
        })
    }

    #[tracing::instrument(skip(self), fields(ride_id = %self.id))]
    pub fn accept(&mut self, driver_id: Uuid) -> Result<(), Error> {
        self.transition(Status::Accepted)?;
        self.driver_id = Some(driver_id);
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(ride_id = %self.id))]
    pub fn start(&mut self) -> Result<(), Error> {
        self.transition(Status::InProgress)
    }

    #[tracing::instrument(skip(self), fields(ride_id = %self.id))]
    pub fn finish(&mut self) -> Result<(), Error> {
        self.transition(Status::Completed)
    }

    #[tracing::instrument(skip(self), fields(ride_id = %self.id))]
    pub fn cancel(&mut self) -> Result<(), Error> {
        self.transition(Status::Cancelled)
    }

    fn transition(&mut self, next: Status) -> Result<(), Error> {
        if self.status.is_terminal() {
            tracing::info!("ride is already {}", self.status);
            return Err(Error::invalid_status_error());
        }

        if !self.status.can_transition_to(next) {
            tracing::info!("cannot move ride from {} to {}", self.status, next);
            return Err(Error::invalid_status_error());
        }

        self.status = next;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn passenger_id(&self) -> Uuid {
        self.passenger_id
    }

    pub fn driver_id(&self) -> Option<Uuid> {
        self.driver_id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn origin(&self) -> Coordinates {
        self.origin
    }

    pub fn destination(&self) -> Coordinates {
        self.destination
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn distance(&self) -> f64 {
        self.origin.distance_to(&self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requested_ride() -> Ride {
        Ride::create(
            Uuid::new_v4(),
            -27.584905257808835,
            -48.545022195325124,
            -27.496887588317275,
            -48.522234807851476,
            &FarePolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn create_starts_requested_without_driver() {
        let ride = requested_ride();

        assert_eq!(ride.status(), Status::Requested);
        assert_eq!(ride.driver_id(), None);
        assert_eq!(ride.fare(), FarePolicy::default().fare(ride.distance()));
        assert!(ride.fare() > 0.0);
    }

    #[test]
    fn create_rejects_degenerate_route() {
        let err = Ride::create(
            Uuid::new_v4(),
            -27.5,
            -48.5,
            -27.5,
            -48.5,
            &FarePolicy::default(),
        )
        .unwrap_err();

        assert!(err.is_invalid_route_error());
    }

    #[test]
    fn create_rejects_bad_latitude() {
        let err = Ride::create(Uuid::new_v4(), 91.0, 0.0, 0.0, 0.0, &FarePolicy::default())
            .unwrap_err();

        assert!(err.is_invalid_coordinates_error());
    }

    #[test]
    fn accept_assigns_driver() {
        let mut ride = requested_ride();
        let driver_id = Uuid::new_v4();

        ride.accept(driver_id).unwrap();

        assert_eq!(ride.status(), Status::Accepted);
        assert_eq!(ride.driver_id(), Some(driver_id));
    }

    #[test]
    fn second_accept_is_rejected_and_keeps_first_driver() {
        let mut ride = requested_ride();
        let first = Uuid::new_v4();
        ride.accept(first).unwrap();

        let err = ride.accept(Uuid::new_v4()).unwrap_err();

        assert!(err.is_invalid_status_error());
        assert_eq!(ride.driver_id(), Some(first));
        assert_eq!(ride.status(), Status::Accepted);
    }

    #[test]
    fn full_lifecycle() {
        let mut ride = requested_ride();

        assert!(ride.start().unwrap_err().is_invalid_status_error());
        ride.accept(Uuid::new_v4()).unwrap();
        assert!(ride.finish().unwrap_err().is_invalid_status_error());
        ride.start().unwrap();
        assert!(ride.cancel().unwrap_err().is_invalid_status_error());
        ride.finish().unwrap();

        assert_eq!(ride.status(), Status::Completed);
        assert!(ride.status().is_terminal());
    }

    #[test]
    fn cancel_from_requested_keeps_driver_unset() {
        let mut ride = requested_ride();
        ride.cancel().unwrap();

        assert_eq!(ride.status(), Status::Cancelled);
        assert_eq!(ride.driver_id(), None);
        assert!(ride.accept(Uuid::new_v4()).is_err());
    }

    #[test]
    fn only_documented_edges_exist() {
        use Status::*;

        let all = [Requested, Accepted, InProgress, Completed, Cancelled];
        let mut edges = 0;
        for from in all {
            for to in all {
                if from.can_transition_to(to) {
                    edges += 1;
                    assert!(!from.is_terminal());
                }
            }
        }

        assert_eq!(edges, 5);
    }

    #[test]
    fn status_names_round_trip() {
        for status in [
            Status::Requested,
            Status::Accepted,
            Status::InProgress,
            Status::Completed,
            Status::Cancelled,
        ] {
            assert_eq!(status.name().parse::<Status>().unwrap(), status);
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.name())
            );
        }
    }
}
