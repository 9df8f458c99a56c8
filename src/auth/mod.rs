mod authorizor;

pub use authorizor::Authorizor;
