//! Invoices: listing, detail with owning company, create/update/delete.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::InvoiceService;
