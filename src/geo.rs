//! Great-circle distance between two points on the Earth's surface.

use geo::{HaversineDistance, Point};

/// Haversine distance in kilometres between (`lat1`, `long1`) and
/// (`lat2`, `long2`), all in decimal degrees.
pub fn distance(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    let p1 = Point::new(long1, lat1);
    let p2 = Point::new(long2, lat2);

    p1.haversine_distance(&p2) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_apart() {
        assert_eq!(distance(-27.5, -48.5, -27.5, -48.5), 0.0);
    }

    #[test]
    fn florianopolis_trip() {
        let d = distance(
            -27.584905257808835,
            -48.545022195325124,
            -27.496887588317275,
            -48.522234807851476,
        );
        assert!((d - 10.04).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn nyc_to_la() {
        let d = distance(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((d - 3935.7).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn symmetric() {
        let a = distance(10.0, 20.0, -5.0, 33.0);
        let b = distance(-5.0, 33.0, 10.0, 20.0);
        assert!((a - b).abs() < 1e-9);
    }
}
