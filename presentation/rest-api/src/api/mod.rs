pub mod error;
pub mod health;
pub mod message;
pub mod style;
pub mod suggestion;
pub mod tags;
