use clap::Parser;
use hostinfo_domain::config::LogFormat;
use hostinfo_domain::CliOverrides;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Argument value where an empty string means "not set", so `PORT=` and
/// `DIR_PATH=` in the environment behave like the variable is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unset<T>(pub Option<T>);

impl<T> FromStr for Unset<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Unset(None));
        }
        s.parse().map(|v| Unset(Some(v))).map_err(|e: T::Err| e.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "hostinfo")]
#[command(version)]
#[command(about = "Reports this host's FQDN and remembers the last client that asked")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "HOSTINFO_CONFIG")]
    pub config: Option<String>,

    /// HTTP listen port [default: 3550]
    #[arg(short, long, env = "PORT")]
    pub port: Option<Unset<u16>>,

    /// Bind address [default: 0.0.0.0]
    #[arg(short, long = "bind", env = "BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Directory for the caller record file; persistence is off when unset
    #[arg(short, long, env = "DIR_PATH")]
    pub dir_path: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output: json or pretty
    #[arg(long, env = "LOG_FORMAT")]
    pub log_format: Option<Unset<LogFormat>>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl Cli {
    pub fn config_path(&self) -> Option<&str> {
        self.config.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port.as_ref().and_then(|p| p.0),
            bind_address: non_empty(&self.bind_address),
            dir_path: non_empty(&self.dir_path).map(PathBuf::from),
            log_level: non_empty(&self.log_level),
            log_format: self.log_format.as_ref().and_then(|f| f.0),
        }
    }
}
