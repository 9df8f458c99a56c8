use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    entities::{Account, Signup},
    error::Error,
};

/// Narrow view of the external account service.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    async fn signup(&self, input: Signup) -> Result<Uuid, Error>;

    /// `Ok(None)` when the account service has no such account.
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, Error>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignupResponse {
    account_id: Uuid,
}

#[derive(Clone, Debug)]
pub struct HttpAccountGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAccountGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AccountGateway for HttpAccountGateway {
    #[tracing::instrument(skip(self, input))]
    async fn signup(&self, input: Signup) -> Result<Uuid, Error> {
        let url = format!("{}/signup", self.base_url);

        let res = self.client.post(url).json(&input).send().await?;

        let status_code = res.status();

        if status_code.is_client_error() {
            return Err(Error::invalid_input_error("signup rejected"));
        } else if !status_code.is_success() {
            return Err(Error::gateway_error(format!(
                "account service answered {}",
                status_code
            )));
        }

        let data: SignupResponse = res.json().await?;

        Ok(data.account_id)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, Error> {
        let url = format!("{}/accounts/{}", self.base_url, account_id);

        let res = self.client.get(url).send().await?;

        let status_code = res.status();

        if status_code == StatusCode::NOT_FOUND {
            return Ok(None);
        } else if !status_code.is_success() {
            return Err(Error::gateway_error(format!(
                "account service answered {}",
                status_code
            )));
        }

        Ok(Some(res.json().await?))
    }
}

/// Account service stand-in that keeps accounts in process.
#[derive(Debug, Default)]
pub struct InMemoryAccountGateway {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountGateway for InMemoryAccountGateway {
    #[tracing::instrument(skip(self, input))]
    async fn signup(&self, input: Signup) -> Result<Uuid, Error> {
        if !input.is_passenger && !input.is_driver {
            return Err(Error::invalid_input_error(
                "account must be a passenger or a driver",
            ));
        }

        if input.is_driver && input.car_plate.as_deref().unwrap_or("").is_empty() {
            return Err(Error::invalid_input_error("driver requires a car plate"));
        }

        let account_id = Uuid::new_v4();
        let account = Account::from_signup(account_id, input);

        self.accounts.write().await.insert(account_id, account);

        Ok(account_id)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, Error> {
        Ok(self.accounts.read().await.get(&account_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn signup(is_passenger: bool, is_driver: bool, car_plate: Option<&str>) -> Signup {
        Signup {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            cpf: "97456321558".into(),
            password: "123456".into(),
            car_plate: car_plate.map(String::from),
            is_passenger,
            is_driver,
        }
    }

    #[test]
    fn signup_then_find() {
        let gateway = InMemoryAccountGateway::new();

        let id = block_on(gateway.signup(signup(false, true, Some("AAA9999")))).unwrap();
        let account = block_on(gateway.find_by_id(id)).unwrap().unwrap();

        assert_eq!(account.account_id, id);
        assert!(account.is_driver);
        assert!(!account.is_passenger);
    }

    #[test]
    fn unknown_account_is_none() {
        let gateway = InMemoryAccountGateway::new();

        assert!(block_on(gateway.find_by_id(Uuid::new_v4()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn signup_requires_a_role() {
        let gateway = InMemoryAccountGateway::new();

        let err = block_on(gateway.signup(signup(false, false, None))).unwrap_err();
        assert!(err.is_invalid_input_error());
    }

    #[test]
    fn driver_signup_requires_car_plate() {
        let gateway = InMemoryAccountGateway::new();

        let err = block_on(gateway.signup(signup(false, true, None))).unwrap_err();
        assert!(err.is_invalid_input_error());
    }

    #[test]
    fn account_json_is_camel_case() {
        let json = serde_json::json!({
            "accountId": "5f4a3c1e-8d4b-4e1a-9d57-2a0c6c2b7a10",
            "name": "John Doe",
            "email": "john.doe@example.com",
            "cpf": "97456321558",
            "carPlate": "AAA9999",
            "isDriver": true
        });

        let account: Account = serde_json::from_value(json).unwrap();
        assert!(account.is_driver);
        assert!(!account.is_passenger);
        assert_eq!(account.car_plate.as_deref(), Some("AAA9999"));
    }
}
