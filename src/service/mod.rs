//! CadastroService: request-level operations over an injected store.

mod crud;
mod validation;
pub use crud::CadastroService;
pub use validation::RequestValidator;
