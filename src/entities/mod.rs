mod account;
mod coordinates;
mod position;
mod ride;

pub use account::{Account, Signup};
pub use coordinates::Coordinates;
pub use position::{travelled_distance, Position};
pub use ride::{Ride, Status as RideStatus};
