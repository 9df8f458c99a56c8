mod account;

pub use account::{AccountGateway, HttpAccountGateway, InMemoryAccountGateway};
