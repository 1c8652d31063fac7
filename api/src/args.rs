use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use nesventory_gemini_core::domain::common::{
    DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL, LLMConfig, NesventoryConfig,
};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8002;

#[derive(Debug, Clone, Parser)]
#[command(name = "nesventory-gemini", version, about = "NesVentory Gemini plugin")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub gemini: GeminiArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// Listen port, takes precedence over PORT
    #[arg(long = "host-port", env = "HOST_PORT")]
    pub host_port: Option<String>,
    #[arg(long = "port", env = "PORT")]
    pub port: Option<String>,
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
    /// Directory holding the pre-built frontend bundle
    #[arg(long = "dist-path", env = "DIST_PATH", default_value = "dist")]
    pub dist_path: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GeminiArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,
    /// Base URL of the Gemini REST API
    #[arg(long = "gemini-api-base", env = "GEMINI_API_BASE", default_value = DEFAULT_GEMINI_API_BASE)]
    pub api_base: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl ServerArgs {
    pub fn resolve_port(&self) -> u16 {
        resolve_port(self.host_port.as_deref(), self.port.as_deref())
    }
}

/// `HOST_PORT` wins over `PORT` whenever it is set, even if invalid. Values
/// outside 1..=65535 fall back to [`DEFAULT_PORT`].
pub fn resolve_port(host_port: Option<&str>, port: Option<&str>) -> u16 {
    let Some(raw) = host_port.or(port) else {
        return DEFAULT_PORT;
    };

    match raw.trim().parse::<u32>() {
        Ok(value @ 1..=65535) => value as u16,
        Ok(value) => {
            warn!(
                "Invalid port configuration: Port must be between 1 and 65535, got {}",
                value
            );
            warn!("Using default port {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
        Err(e) => {
            warn!("Invalid port configuration: {:?} is not a number ({})", raw, e);
            warn!("Using default port {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
    }
}

impl From<Args> for NesventoryConfig {
    fn from(args: Args) -> Self {
        NesventoryConfig {
            llm: LLMConfig {
                gemini_api_key: args.gemini.api_key,
                gemini_model: args.gemini.model,
                gemini_api_base: args.gemini.api_base,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(resolve_port(None, None), 8002);
    }

    #[test]
    fn test_host_port_preferred_over_port() {
        assert_eq!(resolve_port(Some("9000"), Some("9100")), 9000);
        assert_eq!(resolve_port(None, Some("9100")), 9100);
    }

    #[test]
    fn test_invalid_host_port_does_not_fall_through_to_port() {
        assert_eq!(resolve_port(Some("abc"), Some("9100")), 8002);
    }

    #[test]
    fn test_out_of_range_port_uses_default() {
        assert_eq!(resolve_port(Some("0"), None), 8002);
        assert_eq!(resolve_port(Some("65536"), None), 8002);
        assert_eq!(resolve_port(Some("-1"), None), 8002);
        assert_eq!(resolve_port(Some("65535"), None), 65535);
        assert_eq!(resolve_port(Some("1"), None), 1);
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::parse_from([
            "nesventory-gemini",
            "--host-port",
            "8100",
            "--gemini-api-key",
            "secret",
            "--allowed-origins",
            "https://a.example,https://b.example",
            "--dist-path",
            "/srv/dist",
        ]);

        assert_eq!(args.server.resolve_port(), 8100);
        assert_eq!(args.server.allowed_origins, [
            "https://a.example",
            "https://b.example"
        ]);
        assert_eq!(args.server.dist_path, PathBuf::from("/srv/dist"));

        let config = NesventoryConfig::from(args);
        assert_eq!(config.llm.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.llm.gemini_api_base, DEFAULT_GEMINI_API_BASE);
    }
}
