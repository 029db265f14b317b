//! Industries and their many-to-many links to companies.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::IndustryService;
