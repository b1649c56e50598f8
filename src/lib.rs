//! Cadastro service: REST directory of registrants backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{load as load_config, AppConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Cadastro, NewCadastro};
pub use routes::{app, cadastro_routes, common_routes};
pub use service::CadastroService;
pub use state::AppState;
pub use store::{connect_store, CadastroStore, MemoryCadastroStore, PgCadastroStore};
