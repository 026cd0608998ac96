//! Visit workflows: query a visit with its joined records, create a visit
//! with its service lines in one transaction.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::VisitService;
