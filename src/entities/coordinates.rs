use geo_types::{Geometry, Point};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geo;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    long: f64,
}

impl Coordinates {
    pub fn new(lat: f64, long: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::invalid_coordinates_error());
        }

        if !long.is_finite() || !(-180.0..=180.0).contains(&long) {
            return Err(Error::invalid_coordinates_error());
        }

        Ok(Self { lat, long })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn long(&self) -> f64 {
        self.long
    }

    /// Great-circle distance in kilometres.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        geo::distance(self.lat, self.long, other.lat, other.long)
    }
}

// PostGIS points are (x, y) = (longitude, latitude)
impl From<Coordinates> for Geometry<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Geometry::Point(Point::new(coordinates.long, coordinates.lat))
    }
}

impl TryFrom<Geometry<f64>> for Coordinates {
    type Error = Error;

    fn try_from(geometry: Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Point(point) => Coordinates::new(point.y(), point.x()),
            _ => Err(Error::invalid_coordinates_error()),
        }
    }
}

#[test]
fn rejects_out_of_range() {
    assert!(Coordinates::new(91.0, 0.0)
        .unwrap_err()
        .is_invalid_coordinates_error());
    assert!(Coordinates::new(-90.5, 0.0).is_err());
    assert!(Coordinates::new(0.0, 180.1).is_err());
    assert!(Coordinates::new(0.0, f64::NAN).is_err());
    assert!(Coordinates::new(90.0, -180.0).is_ok());
}

#[test]
fn geometry_round_trip_keeps_axis_order() {
    let c = Coordinates::new(-27.58, -48.54).unwrap();
    let geometry: Geometry<f64> = c.into();

    match &geometry {
        Geometry::Point(p) => {
            assert_eq!(p.x(), -48.54);
            assert_eq!(p.y(), -27.58);
        }
        _ => panic!("expected a point"),
    }

    assert_eq!(Coordinates::try_from(geometry).unwrap(), c);
}
