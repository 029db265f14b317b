//! Relational model of the invoicing store: companies, their invoices and
//! the industries they belong to, plus connection setup.

pub mod errors;
pub mod db;
pub mod schema;
pub mod company;
pub mod invoice;
pub mod industry;
pub mod industry_company;
