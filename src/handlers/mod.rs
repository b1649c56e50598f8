//! HTTP handlers for registrant CRUD.

pub mod cadastro;
pub use cadastro::*;
