//! Command implementations for the pessoa CLI

pub mod serve;

pub use serve::run_serve;
