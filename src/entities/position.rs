use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

/// A tracked point along a ride in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub coordinates: Coordinates,
    pub date: DateTime<Utc>,
}

impl Position {
    pub fn new(ride_id: Uuid, coordinates: Coordinates, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ride_id,
            coordinates,
            date,
        }
    }
}

/// Total great-circle length in kilometres of the path through `positions`,
/// taken in the order given.
pub fn travelled_distance(positions: &[Position]) -> f64 {
    positions
        .windows(2)
        .map(|pair| pair[0].coordinates.distance_to(&pair[1].coordinates))
        .sum()
}

#[test]
fn travelled_distance_sums_legs() {
    use chrono::Duration;

    let ride_id = Uuid::new_v4();
    let start = Utc::now();
    let points = [(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)];

    let positions: Vec<Position> = points
        .iter()
        .enumerate()
        .map(|(i, (lat, long))| {
            Position::new(
                ride_id,
                Coordinates::new(*lat, *long).unwrap(),
                start + Duration::seconds(i as i64),
            )
        })
        .collect();

    let d = travelled_distance(&positions);
    assert!((d - 222.39).abs() < 0.01, "got {}", d);
    assert_eq!(travelled_distance(&positions[..1]), 0.0);
    assert_eq!(travelled_distance(&[]), 0.0);
}
