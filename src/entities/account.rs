use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account as returned by the account service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, PolarClass)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[polar(attribute)]
    pub account_id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    #[serde(default)]
    pub car_plate: Option<String>,
    #[polar(attribute)]
    #[serde(default)]
    pub is_passenger: bool,
    #[polar(attribute)]
    #[serde(default)]
    pub is_driver: bool,
}

/// Profile submitted to the account service on signup.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_plate: Option<String>,
    #[serde(default)]
    pub is_passenger: bool,
    #[serde(default)]
    pub is_driver: bool,
}

impl Account {
    pub fn from_signup(account_id: Uuid, signup: Signup) -> Self {
        Self {
            account_id,
            name: signup.name,
            email: signup.email,
            cpf: signup.cpf,
            car_plate: signup.car_plate,
            is_passenger: signup.is_passenger,
            is_driver: signup.is_driver,
        }
    }
}
