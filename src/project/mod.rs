//! Project cards, user descriptions and reorder requests.

pub mod catalog;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use catalog::{default_projects, load_catalog, validate_all};
pub use error::ProjectError;
pub use types::{Project, ReorderRequest, UserDescription};
