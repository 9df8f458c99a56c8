use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::Error;
use crate::pricing::{FarePolicy, BASE_FARE, PER_KM_RATE};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub account_service_url: String,
    pub listen_addr: SocketAddr,
    pub fare_policy: FarePolicy,
}

impl Config {
    /// Reads configuration from the environment, after loading `.env` if
    /// one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::config_error(format!("{} is not set", key)))
        };

        let base_fare = parse_or(&lookup, "RIDE_BASE_FARE", BASE_FARE)?;
        let rate_per_km = parse_or(&lookup, "RIDE_RATE_PER_KM", PER_KM_RATE)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            account_service_url: required("ACCOUNT_SERVICE_URL")?,
            listen_addr: match lookup("LISTEN_ADDR") {
                Some(value) => parse(&value, "LISTEN_ADDR")?,
                None => parse(DEFAULT_LISTEN_ADDR, "LISTEN_ADDR")?,
            },
            fare_policy: FarePolicy::new(base_fare, rate_per_km)?,
        })
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> Result<T, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config_error(format!("{} has an invalid value", key)))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => parse(&value, key),
        None => Ok(default),
    }
}
