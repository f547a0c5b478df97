pub mod routes;
pub mod startup;
pub mod servicios;
pub mod mock;
pub mod errors;
pub mod openapi;

pub use startup::{run, run_mock};
