//! HTTP server command
//!
//! Builds the database and server configuration from flags/environment and
//! runs the server until shutdown.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use pessoa_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use pessoa_server::{run_server, DataContext, DatabaseConfig, ServerConfig, TableName};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PESSOA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Table holding the records (`table` or `schema.table`)
    #[arg(long, env = "PESSOA_TABLE", default_value = "Pessoa")]
    pub table: TableName,

    /// Maximum number of pooled database connections
    #[arg(long, env = "PESSOA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before failing a request
    #[arg(long, env = "PESSOA_ACQUIRE_TIMEOUT", default_value_t = 30)]
    pub acquire_timeout: u64,

    /// Connect on the first request instead of at startup
    #[arg(long)]
    pub lazy: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn database_config(&self) -> Result<DatabaseConfig> {
        let url = self
            .database_url
            .clone()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        Ok(DatabaseConfig::new(url)
            .with_table(self.table.clone())
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(Duration::from_secs(self.acquire_timeout)))
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.database_config()?;

    tracing::info!("Starting pessoa server on {}", args.bind);

    let ctx = if args.lazy {
        DataContext::connect_lazy(&db_config).context("Invalid database URL")?
    } else {
        DataContext::connect(&db_config)
            .await
            .context("Failed to create database pool")?
    };

    // Blocks until shutdown
    run_server(ctx, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ServeArgs, clap::Error> {
        ServeArgs::try_parse_from(std::iter::once("serve").chain(args.iter().copied()))
    }

    #[test]
    fn builds_configs_from_flags() {
        let args = parse(&[
            "--database-url",
            "postgres://localhost/pessoa",
            "--table",
            "dbo.Pessoa",
            "--max-connections",
            "3",
            "--acquire-timeout",
            "2",
            "--bind",
            "0.0.0.0:8080",
        ])
        .unwrap();

        let db = args.database_config().unwrap();
        assert_eq!(db.url, "postgres://localhost/pessoa");
        assert_eq!(db.table.quoted(), "\"dbo\".\"Pessoa\"");
        assert_eq!(db.max_connections, 3);
        assert_eq!(db.acquire_timeout, Duration::from_secs(2));

        let server = args.server_config();
        assert_eq!(server.bind_addr.port(), 8080);
        assert!(!server.cors_permissive);
    }

    #[test]
    fn rejects_invalid_table_name() {
        let err = parse(&["--table", "Pessoa; DROP TABLE x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
