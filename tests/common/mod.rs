#![allow(dead_code)]

use std::sync::Arc;

use rideline::engine::Engine;
use rideline::entities::Signup;
use rideline::gateway::{AccountGateway, InMemoryAccountGateway};
use rideline::pricing::FarePolicy;
use rideline::repository::{InMemoryPositionRepository, InMemoryRideRepository};
use rideline::usecase::RequestRideInput;
use uuid::Uuid;

pub const FROM_LAT: f64 = -27.584905257808835;
pub const FROM_LONG: f64 = -48.545022195325124;
pub const TO_LAT: f64 = -27.496887588317275;
pub const TO_LONG: f64 = -48.522234807851476;

pub struct Fixture {
    pub engine: Engine,
    pub accounts: Arc<InMemoryAccountGateway>,
    pub rides: Arc<InMemoryRideRepository>,
    pub positions: Arc<InMemoryPositionRepository>,
}

impl Fixture {
    pub fn new() -> Self {
        let accounts = Arc::new(InMemoryAccountGateway::new());
        let rides = Arc::new(InMemoryRideRepository::new());
        let positions = Arc::new(InMemoryPositionRepository::new(rides.clone()));

        let engine = Engine::new(
            accounts.clone(),
            rides.clone(),
            positions.clone(),
            FarePolicy::default(),
        )
        .unwrap();

        Self {
            engine,
            accounts,
            rides,
            positions,
        }
    }

    pub async fn signup_passenger(&self, n: u32) -> Uuid {
        self.accounts.signup(passenger(n)).await.unwrap()
    }

    pub async fn signup_driver(&self, n: u32) -> Uuid {
        self.accounts.signup(driver(n)).await.unwrap()
    }

    pub async fn request_ride(&self, passenger_id: Uuid) -> Uuid {
        self.engine
            .request_ride
            .execute(ride_request(passenger_id))
            .await
            .unwrap()
            .ride_id
    }
}

pub fn passenger(n: u32) -> Signup {
    Signup {
        name: "John Doe".into(),
        email: format!("john.doe.passenger{}@example.com", n),
        cpf: "97456321558".into(),
        password: "123456".into(),
        car_plate: None,
        is_passenger: true,
        is_driver: false,
    }
}

pub fn driver(n: u32) -> Signup {
    Signup {
        name: "John Doe".into(),
        email: format!("john.doe.driver{}@example.com", n),
        cpf: "97456321558".into(),
        password: "123456".into(),
        car_plate: Some("AAA9999".into()),
        is_passenger: false,
        is_driver: true,
    }
}

pub fn ride_request(passenger_id: Uuid) -> RequestRideInput {
    RequestRideInput {
        passenger_id,
        from_lat: FROM_LAT,
        from_long: FROM_LONG,
        to_lat: TO_LAT,
        to_long: TO_LONG,
    }
}
