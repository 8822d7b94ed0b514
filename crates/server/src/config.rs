use std::path::PathBuf;

use clap::Parser;

/// Server configuration from command-line flags, falling back to environment
/// variables and then to defaults
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-server")]
#[command(about = "HTTP API for the ReelCatalog movie catalog", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// JSON seed file; the built-in catalog is used when absent
    #[arg(long, env = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,
}

impl ServerConfig {
    /// `host:port` to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
