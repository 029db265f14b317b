//! Service layer providing the business operations behind each HTTP resource.
//! - Repositories are the store-client seam; the sea-orm ones are built once
//!   at bootstrap and shared, the in-memory one backs tests.
//! - Services own input presence checks, code normalisation, join shaping
//!   and the classified/unclassified error split.

pub mod errors;
pub mod input;
pub mod company;
pub mod invoice;
pub mod industry;
pub mod memory;
#[cfg(test)]
pub mod test_support;
