//! Fare policy applied when a ride is requested.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Base fare in currency units.
pub const BASE_FARE: f64 = 2.50;

/// Per-kilometre rate in currency units.
pub const PER_KM_RATE: f64 = 1.50;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FarePolicy {
    base_fare: f64,
    rate_per_km: f64,
}

impl FarePolicy {
    pub fn new(base_fare: f64, rate_per_km: f64) -> Result<Self, Error> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(base_fare) || !valid(rate_per_km) {
            return Err(Error::config_error("fare policy must be non-negative"));
        }

        Ok(Self {
            base_fare,
            rate_per_km,
        })
    }

    pub fn base_fare(&self) -> f64 {
        self.base_fare
    }

    pub fn rate_per_km(&self) -> f64 {
        self.rate_per_km
    }

    /// `fare = base_fare + rate_per_km * distance_km`, rounded to cents.
    pub fn fare(&self, distance_km: f64) -> f64 {
        let raw = self.base_fare + self.rate_per_km * distance_km.max(0.0);
        (raw * 100.0).round() / 100.0
    }
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            rate_per_km: PER_KM_RATE,
        }
    }
}
