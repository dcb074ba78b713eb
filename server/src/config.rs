//! Command-line and environment configuration for the server binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Todo service settings. Every flag also reads from an environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(version, about = "In-memory todo HTTP service", long_about = None)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression)
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filter for the tracing subscriber. An invalid directive falls back to
    /// `info`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn explicit_flags_win() {
        let config = ServerConfig::try_parse_from([
            "todo-server",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn port_must_be_numeric() {
        assert!(ServerConfig::try_parse_from(["todo-server", "--port", "http"]).is_err());
    }

    #[test]
    fn bad_filter_falls_back() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "todo_core=notalevel".to_string(),
        };
        assert_eq!(config.env_filter().max_level_hint(), Some(LevelFilter::INFO));
    }
}
