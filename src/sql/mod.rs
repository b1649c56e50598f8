//! SQL for the Cadastro table: identifiers from config only, values as parameters.

mod builder;
pub use builder::*;
