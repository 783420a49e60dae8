pub mod config;
pub mod error;
pub mod frontend;
pub mod message;
pub mod prompt;
pub mod routes;
pub mod services;
pub mod state;
