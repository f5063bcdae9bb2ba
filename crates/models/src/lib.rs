//! SeaORM entities for the `provider` and `fruit` tables plus connection helpers.

pub mod db;
pub mod provider;
pub mod fruit;

#[cfg(test)]
mod tests;
