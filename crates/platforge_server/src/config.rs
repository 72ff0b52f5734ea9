//! Server configuration.

use std::path::PathBuf;

use clap::Parser;

/// Command-line and environment configuration for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "platforge-server", version, about = "PlatForge generation API")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "PLATFORGE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PLATFORGE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Template store base directory.
    #[arg(long, env = "PLATFORGE_TEMPLATES_DIR", default_value = "templates")]
    pub templates_dir: PathBuf,
}

impl ServerConfig {
    /// Bind address as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
