//! Companies: listing, nested detail view, create/update/delete.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CompanyService;
