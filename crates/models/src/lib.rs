pub mod errors;
pub mod db;
pub mod client;
pub mod mechanic;
pub mod service;
pub mod visit;
pub mod visit_service;

#[cfg(any(test, feature = "test-utils"))]
pub mod schema;

#[cfg(test)]
mod tests;
