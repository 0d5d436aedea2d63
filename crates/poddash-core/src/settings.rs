use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{DashboardError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Podcast download-metrics dashboard
#[derive(Parser, Debug, Clone)]
#[command(
    name = "poddash",
    about = "Serve podcast download metrics as an interactive dashboard",
    version
)]
pub struct Settings {
    /// Path to the episode metrics CSV
    #[arg(long, default_value = "podcast_episodes.csv")]
    pub data_file: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8050)]
    pub port: u16,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse CLI arguments and the `PORT` environment variable, then apply
    /// the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but from an explicit argument list, enabling
    /// unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Resolve the socket address the server should bind to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| DashboardError::Config(format!("invalid host address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Apply cross-field overrides after parsing.
    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── test_settings_default_values ─────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        // Parse with only the binary name (no flags) to get all defaults.
        let settings = Settings::parse_from(["poddash"]);

        assert_eq!(settings.data_file, PathBuf::from("podcast_episodes.csv"));
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.debug);
    }

    // ── test_settings_cli_parsing ────────────────────────────────────────────

    #[test]
    fn test_settings_cli_explicit_data_file() {
        let settings = Settings::parse_from(["poddash", "--data-file", "/tmp/metrics.csv"]);
        assert_eq!(settings.data_file, PathBuf::from("/tmp/metrics.csv"));
    }

    #[test]
    fn test_settings_cli_explicit_port() {
        let settings = Settings::parse_from(["poddash", "--port", "9000"]);
        assert_eq!(settings.port, 9000);
    }

    #[test]
    fn test_settings_debug_overrides_log_level() {
        let settings = Settings::load_from_args(["poddash", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");
    }

    // ── test_bind_addr ───────────────────────────────────────────────────────

    #[test]
    fn test_bind_addr_all_interfaces() {
        let settings = Settings::parse_from(["poddash", "--port", "8050"]);
        let addr = settings.bind_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8050");
    }

    #[test]
    fn test_bind_addr_localhost() {
        let settings = Settings::parse_from(["poddash", "--host", "127.0.0.1", "--port", "3000"]);
        let addr = settings.bind_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_bind_addr_invalid_host() {
        let settings = Settings::parse_from(["poddash", "--host", "not-an-address"]);
        assert!(settings.bind_addr().is_err());
    }
}
