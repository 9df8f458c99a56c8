use oso::{Oso, PolarClass, ToPolar};

use crate::entities::Account;
use crate::error::Error;

/// Role checks for accounts acting on rides, backed by the Polar rules in
/// `rules.polar`.
#[derive(Clone)]
pub struct Authorizor {
    oso: Oso,
}

impl Authorizor {
    pub fn new() -> Result<Self, Error> {
        let mut oso = Oso::new();

        oso.register_class(Account::get_polar_class())?;

        oso.load_str(include_str!("rules.polar"))?;

        Ok(Self { oso })
    }

    /// Fails with an invalid account error when the rules deny `action`.
    pub fn authorize<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<(), Error>
    where
        Actor: ToPolar,
        Action: ToPolar,
        Resource: ToPolar,
    {
        if self.oso.is_allowed(actor, action, resource)? {
            return Ok(());
        }

        Err(Error::invalid_account_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn account(is_passenger: bool, is_driver: bool) -> Account {
        Account {
            account_id: Uuid::new_v4(),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            cpf: "97456321558".into(),
            car_plate: is_driver.then(|| "AAA9999".to_string()),
            is_passenger,
            is_driver,
        }
    }

    #[test]
    fn passenger_may_request_ride() {
        let authorizor = Authorizor::new().unwrap();

        assert!(authorizor
            .authorize(account(true, false), "request_ride", "ride")
            .is_ok());
    }

    #[test]
    fn driver_only_account_may_not_request_ride() {
        let authorizor = Authorizor::new().unwrap();

        let err = authorizor
            .authorize(account(false, true), "request_ride", "ride")
            .unwrap_err();
        assert!(err.is_invalid_account_error());
    }

    #[test]
    fn driver_may_accept_ride() {
        let authorizor = Authorizor::new().unwrap();

        assert!(authorizor
            .authorize(account(false, true), "accept_ride", "ride")
            .is_ok());
    }

    #[test]
    fn passenger_may_not_accept_ride() {
        let authorizor = Authorizor::new().unwrap();

        let err = authorizor
            .authorize(account(true, false), "accept_ride", "ride")
            .unwrap_err();
        assert!(err.is_invalid_account_error());
    }
}
