pub mod appstate;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod representation;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
