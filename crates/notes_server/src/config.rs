//! Process configuration from flags and environment.

use clap::Parser;
use notes_core::default_log_level;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime settings for the notes HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "notes-server", version, about = "REST API for managing text notes")]
pub struct ServerConfig {
    /// SQLite file holding the notes table; created on first start.
    #[arg(long, env = "NOTES_DB_PATH", default_value = "notes.db")]
    pub db_path: PathBuf,

    /// Socket address to listen on.
    #[arg(long, env = "NOTES_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "NOTES_LOG_LEVEL", default_value = default_log_level())]
    pub log_level: String,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, env = "NOTES_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Worker thread count; defaults to the number of physical cores.
    #[arg(long, env = "NOTES_WORKERS")]
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// Starts the process logger according to `log_level` and `log_dir`.
    pub fn init_logging(&self) -> Result<(), String> {
        match self.log_dir.as_deref() {
            Some(dir) => notes_core::init_logging(&self.log_level, dir),
            None => notes_core::init_stderr_logging(&self.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "notes-server",
            "--db-path",
            "/tmp/notes/test.db",
            "--bind",
            "0.0.0.0:9000",
            "--log-level",
            "warn",
            "--workers",
            "2",
        ])
        .expect("flags should parse");

        assert_eq!(config.db_path.to_str(), Some("/tmp/notes/test.db"));
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.workers, Some(2));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let result = ServerConfig::try_parse_from(["notes-server", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_log_level_is_reported_by_logging_init() {
        let config = ServerConfig::try_parse_from(["notes-server", "--log-level", "loud"])
            .expect("level is free-form at parse time");
        let err = config.init_logging().expect_err("unknown level must fail");
        assert!(err.contains("unsupported log level"));
    }
}
