//! Domain models with validation at construction
//!
//! Configuration input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pessoa;
pub mod table;
pub mod validation;

pub use pessoa::Pessoa;
pub use table::TableName;
pub use validation::ValidationError;
