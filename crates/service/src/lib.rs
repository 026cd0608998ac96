//! Service layer for workshop visits.
//! - `visit::repository` defines the data-access capability (fetch, create).
//! - `visit::repo::seaorm` implements it on top of the `models` entities.
//! - `visit::service` holds the request-level rules shared by all backends.

pub mod errors;
pub mod visit;
#[cfg(test)]
pub mod test_support;
