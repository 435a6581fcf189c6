use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_API_HOST: &str = "exercisedb.p.rapidapi.com";
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "exdb-mcpd", version, about = "ExerciseDB MCP daemon.")]
struct CliArgs {
    /// RapidAPI key for the upstream ExerciseDB service.
    #[arg(long, env = "EXDB_API_KEY")]
    api_key: Option<String>,

    #[arg(long, env = "EXDB_API_HOST", default_value = DEFAULT_API_HOST)]
    api_host: String,

    #[arg(
        long,
        env = "EXDB_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_HTTP_TIMEOUT_SECS
    )]
    http_timeout_secs: u64,

    #[arg(
        long = "cache",
        env = "EXDB_CACHE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    cache: bool,

    #[arg(
        long = "stdio",
        env = "EXDB_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "EXDB_MCP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "EXDB_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct ExdbConfig {
    pub api_key: String,
    pub api_host: String,
    pub http_timeout: Duration,
    pub cache: bool,
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl ExdbConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for ExdbConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingSetting("EXDB_API_KEY"))?;

        if args.api_host.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "EXDB_API_HOST",
                value: args.api_host,
            });
        }

        if args.http_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "EXDB_HTTP_TIMEOUT_SECS",
                value: args.http_timeout_secs.to_string(),
            });
        }

        if !args.enable_stdio && !args.mcp_serve {
            return Err(ConfigError::InvalidSetting {
                name: "EXDB_ENABLE_STDIO",
                value: "no transport enabled".to_string(),
            });
        }

        Ok(Self {
            api_key,
            api_host: args.api_host,
            http_timeout: Duration::from_secs(args.http_timeout_secs),
            cache: args.cache,
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            api_key: Some("test-key".to_string()),
            api_host: DEFAULT_API_HOST.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            cache: true,
            enable_stdio: true,
            mcp_serve: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
        }
    }

    #[test]
    fn rejects_missing_api_key() {
        let mut args = base_args();
        args.api_key = None;
        assert!(matches!(
            ExdbConfig::try_from(args),
            Err(ConfigError::MissingSetting("EXDB_API_KEY"))
        ));
    }

    #[test]
    fn rejects_blank_api_key() {
        let mut args = base_args();
        args.api_key = Some("   ".to_string());
        assert!(matches!(
            ExdbConfig::try_from(args),
            Err(ConfigError::MissingSetting("EXDB_API_KEY"))
        ));
    }

    #[test]
    fn rejects_disabled_transports() {
        let mut args = base_args();
        args.enable_stdio = false;
        args.mcp_serve = false;
        assert!(ExdbConfig::try_from(args).is_err());
    }

    #[test]
    fn accepts_defaults_with_api_key() {
        let config = ExdbConfig::try_from(base_args()).expect("config should parse");
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.cache);
        assert!(config.enable_stdio);
    }
}
