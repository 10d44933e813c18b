pub mod cookie;
pub mod health;
pub mod saml;
