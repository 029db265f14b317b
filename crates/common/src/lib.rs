//! Pieces shared by every crate in the workspace: response types,
//! logging setup and identifier normalisation.

pub mod types;
pub mod utils;
