//! pessoa-server: read-only HTTP API over the `Pessoa` table
//!
//! - `db`: connection pool and the data context over the table
//! - `models`: the `Pessoa` record and validated configuration types
//! - `http`: axum router, handlers, error mapping and server lifecycle

pub mod db;
pub mod http;
pub mod models;

pub use db::{DataContext, DatabaseConfig, DbError};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{Pessoa, TableName};
