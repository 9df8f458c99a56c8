//! One struct per application use case. Each is built with the collaborators
//! it needs and exposes a single `execute`.

mod accept_ride;
mod cancel_ride;
mod finish_ride;
mod get_ride;
mod request_ride;
mod start_ride;
mod update_position;

pub use accept_ride::{AcceptRide, AcceptRideInput};
pub use cancel_ride::CancelRide;
pub use finish_ride::{FinishRide, FinishRideOutput};
pub use get_ride::{GetRide, GetRideOutput};
pub use request_ride::{RequestRide, RequestRideInput, RequestRideOutput};
pub use start_ride::StartRide;
pub use update_position::{UpdatePosition, UpdatePositionInput};
