pub mod clients;
pub mod common;
pub mod health;
pub mod products;
