//! Database layer - connection pool and the data context
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - A connection is held only for the duration of one query
//! - Read-only: nothing in this module writes

pub mod context;
pub mod pool;

pub use context::{DataContext, DbError};
pub use pool::{create_lazy_pool, create_pool, DatabaseConfig};
