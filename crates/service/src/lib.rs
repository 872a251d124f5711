//! Service layer providing the data-access repositories on top of models.
//! - One repository per entity, sharing the generic [`repository::Repository`] shape.
//! - Transfer objects and entity → response mapping live in [`dto`].
//! - Errors distinguish not-found, invalid references and conflicts so the
//!   HTTP layer can pick the status code.

pub mod errors;
pub mod repository;
pub mod dto;
pub mod customers;
pub mod orders;
pub mod service_types;
pub mod users;
#[cfg(test)]
pub mod test_support;

pub use repository::{Include, Repository};
