use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

/// Error surfaced by every use case and collaborator.
///
/// Codes below 100 are infrastructure failures and are never shown to
/// clients verbatim; codes from 100 up are business failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

const CONFIG: i32 = 1;
const PERSISTENCE: i32 = 2;
const GATEWAY: i32 = 3;
const AUTHORIZATION: i32 = 4;
const UNEXPECTED: i32 = 5;

const INVALID_STATUS: i32 = 100;
const INVALID_INPUT: i32 = 101;
const INVALID_ACCOUNT: i32 = 102;
const INVALID_COORDINATES: i32 = 103;
const INVALID_ROUTE: i32 = 104;
const RIDE_NOT_FOUND: i32 = 105;

impl Error {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(CONFIG, message)
    }

    pub fn persistence_error<T: Debug>(err: T) -> Self {
        tracing::error!("persistence failure: {:?}", err);
        Self::new(PERSISTENCE, "persistence error")
    }

    pub fn gateway_error(message: impl Into<String>) -> Self {
        Self::new(GATEWAY, message)
    }

    pub fn authorization_error<T: Debug>(err: T) -> Self {
        tracing::error!("authorization engine failure: {:?}", err);
        Self::new(AUTHORIZATION, "authorization error")
    }

    pub fn unexpected_error() -> Self {
        Self::new(UNEXPECTED, "unexpected error")
    }

    pub fn invalid_status_error() -> Self {
        Self::new(INVALID_STATUS, "invalid status")
    }

    pub fn invalid_input_error(message: impl Into<String>) -> Self {
        Self::new(INVALID_INPUT, message)
    }

    pub fn invalid_account_error() -> Self {
        Self::new(INVALID_ACCOUNT, "invalid account")
    }

    pub fn invalid_coordinates_error() -> Self {
        Self::new(INVALID_COORDINATES, "invalid coordinates")
    }

    pub fn invalid_route_error() -> Self {
        Self::new(INVALID_ROUTE, "invalid route")
    }

    pub fn ride_not_found_error() -> Self {
        Self::new(RIDE_NOT_FOUND, "ride not found")
    }

    pub fn is_persistence_error(&self) -> bool {
        self.code == PERSISTENCE
    }

    pub fn is_gateway_error(&self) -> bool {
        self.code == GATEWAY
    }

    pub fn is_invalid_status_error(&self) -> bool {
        self.code == INVALID_STATUS
    }

    pub fn is_invalid_input_error(&self) -> bool {
        self.code == INVALID_INPUT
    }

    pub fn is_invalid_account_error(&self) -> bool {
        self.code == INVALID_ACCOUNT
    }

    pub fn is_invalid_coordinates_error(&self) -> bool {
        self.code == INVALID_COORDINATES
    }

    pub fn is_invalid_route_error(&self) -> bool {
        self.code == INVALID_ROUTE
    }

    pub fn is_ride_not_found_error(&self) -> bool {
        self.code == RIDE_NOT_FOUND
    }

    fn status_code(&self) -> StatusCode {
        match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            RIDE_NOT_FOUND => StatusCode::NOT_FOUND,
            INVALID_STATUS => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        Error::config_error(format!("environment variable error: {}", err))
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::persistence_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("account gateway transport failure: {:?}", err);
        Error::gateway_error("gateway error")
    }
}

impl From<oso::OsoError> for Error {
    fn from(err: oso::OsoError) -> Self {
        Error::authorization_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self.code {
            1..=99 => "Internal Server Error",
            _ => self.message.as_str(),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[test]
fn kinds_are_distinguishable() {
    let not_found = Error::ride_not_found_error();
    let conflict = Error::invalid_status_error();

    assert!(not_found.is_ride_not_found_error());
    assert!(!not_found.is_invalid_status_error());
    assert!(conflict.is_invalid_status_error());
    assert!(!conflict.is_ride_not_found_error());
    assert_ne!(not_found, conflict);
}

#[test]
fn http_status_mapping() {
    assert_eq!(
        Error::ride_not_found_error().status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        Error::invalid_status_error().status_code(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        Error::invalid_route_error().status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        Error::persistence_error("boom").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
