pub mod routes;
pub mod startup;
pub mod state;
pub mod extract;
pub mod errors;
pub mod openapi;

pub use startup::{build_app, build_memory_app, run};
