//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command-line flags.

use payoff_models::strategies::{
    EngineConfig, GreeksMode, DEFAULT_LOWER_MULTIPLIER, DEFAULT_NUM_POINTS,
    DEFAULT_UPPER_MULTIPLIER,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "payoff.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid Greeks mode: {0}. Must be one of: primary, aggregate")]
    InvalidGreeksMode(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parses a Greeks mode name.
pub fn parse_greeks_mode(s: &str) -> Result<GreeksMode, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "primary" | "primary-leg" | "primary_leg" => Ok(GreeksMode::PrimaryLeg),
        "aggregate" | "all" => Ok(GreeksMode::Aggregate),
        _ => Err(ConfigError::InvalidGreeksMode(s.to_string())),
    }
}

/// Market defaults in percent, used when a command omits them
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketDefaults {
    /// Annualised volatility, percent
    pub volatility_pct: f64,
    /// Annualised risk-free rate, percent
    pub risk_free_pct: f64,
    /// Annualised dividend yield, percent
    pub dividend_pct: f64,
}

impl Default for MarketDefaults {
    fn default() -> Self {
        Self {
            volatility_pct: 20.0,
            risk_free_pct: 5.0,
            dividend_pct: 0.0,
        }
    }
}

/// Payoff curve sampling
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// Number of samples
    pub num_points: usize,
    /// Lower end of the range as a multiple of spot
    pub lower_multiplier: f64,
    /// Upper end of the range as a multiple of spot
    pub upper_multiplier: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            lower_multiplier: DEFAULT_LOWER_MULTIPLIER,
            upper_multiplier: DEFAULT_UPPER_MULTIPLIER,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Market defaults
    pub market: MarketDefaults,
    /// Curve sampling
    pub curve: CurveSettings,
    /// Greeks assembly mode
    #[serde(deserialize_with = "deserialize_greeks_mode")]
    pub greeks_mode: GreeksMode,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            market: MarketDefaults::default(),
            curve: CurveSettings::default(),
            greeks_mode: GreeksMode::PrimaryLeg,
            format: OutputFormat::Table,
        }
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_greeks_mode<'de, D>(deserializer: D) -> Result<GreeksMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_greeks_mode(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_env_f64(name: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a number", name, value)))
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `PAYOFF_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply `PAYOFF_*` overrides from an arbitrary lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PAYOFF_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(v) = lookup("PAYOFF_VOLATILITY_PCT") {
            self.market.volatility_pct = parse_env_f64("PAYOFF_VOLATILITY_PCT", &v)?;
        }
        if let Some(v) = lookup("PAYOFF_RISK_FREE_PCT") {
            self.market.risk_free_pct = parse_env_f64("PAYOFF_RISK_FREE_PCT", &v)?;
        }
        if let Some(v) = lookup("PAYOFF_DIVIDEND_PCT") {
            self.market.dividend_pct = parse_env_f64("PAYOFF_DIVIDEND_PCT", &v)?;
        }
        if let Some(v) = lookup("PAYOFF_NUM_POINTS") {
            self.curve.num_points = v.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("PAYOFF_NUM_POINTS={} is not a count", v))
            })?;
        }
        if let Some(mode) = lookup("PAYOFF_GREEKS_MODE") {
            self.greeks_mode = parse_greeks_mode(&mode)?;
        }
        if let Some(format) = lookup("PAYOFF_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(v) = cli.volatility_pct {
            self.market.volatility_pct = v;
        }
        if let Some(v) = cli.risk_free_pct {
            self.market.risk_free_pct = v;
        }
        if let Some(v) = cli.dividend_pct {
            self.market.dividend_pct = v;
        }
        if let Some(n) = cli.num_points {
            self.curve.num_points = n;
        }
        if let Some(mode) = &cli.greeks_mode {
            self.greeks_mode = parse_greeks_mode(mode)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let market = &self.market;
        if !market.volatility_pct.is_finite() || market.volatility_pct < 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "volatility_pct",
                reason: format!("{} must be a non-negative number", market.volatility_pct),
            });
        }
        if !market.risk_free_pct.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "risk_free_pct",
                reason: format!("{} must be finite", market.risk_free_pct),
            });
        }
        if !market.dividend_pct.is_finite() || market.dividend_pct < 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "dividend_pct",
                reason: format!("{} must be a non-negative number", market.dividend_pct),
            });
        }

        self.engine_config().map(|_| ())
    }

    /// Engine configuration for the curve settings and Greeks mode
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::builder()
            .num_points(self.curve.num_points)
            .range(self.curve.lower_multiplier, self.curve.upper_multiplier)
            .greeks_mode(self.greeks_mode)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                name: "curve",
                reason: e.to_string(),
            })
    }
}

/// Configuration overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Volatility override, percent
    pub volatility_pct: Option<f64>,
    /// Risk-free rate override, percent
    pub risk_free_pct: Option<f64>,
    /// Dividend yield override, percent
    pub dividend_pct: Option<f64>,
    /// Curve sample count override
    pub num_points: Option<usize>,
    /// Greeks mode override
    pub greeks_mode: Option<String>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `payoff.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env_with(env)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.market.volatility_pct, 20.0);
        assert_eq!(config.market.risk_free_pct, 5.0);
        assert_eq!(config.market.dividend_pct, 0.0);
        assert_eq!(config.curve.num_points, 100);
        assert_eq!(config.greeks_mode, GreeksMode::PrimaryLeg);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_format_and_mode_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());

        assert_eq!(parse_greeks_mode("primary").unwrap(), GreeksMode::PrimaryLeg);
        assert_eq!(parse_greeks_mode("Aggregate").unwrap(), GreeksMode::Aggregate);
        assert!(parse_greeks_mode("sum").is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            greeks_mode = "aggregate"
            format = "json"

            [market]
            volatility_pct = 35.0
            risk_free_pct = 4.25

            [curve]
            num_points = 250
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.greeks_mode, GreeksMode::Aggregate);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.market.volatility_pct, 35.0);
        assert_eq!(config.market.risk_free_pct, 4.25);
        // Unspecified fields keep their defaults
        assert_eq!(config.market.dividend_pct, 0.0);
        assert_eq!(config.curve.num_points, 250);
        assert_eq!(config.curve.upper_multiplier, 1.5);
    }

    #[test]
    fn test_toml_rejects_bad_enum() {
        let result: Result<CliConfig, _> = toml::from_str(r#"format = "xml""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[curve]\nnum_points = 1").unwrap();
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "curve", .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = CliConfig::from_file(Path::new("/nonexistent/payoff.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PAYOFF_VOLATILITY_PCT", "30"),
            ("PAYOFF_FORMAT", "csv"),
            ("PAYOFF_GREEKS_MODE", "aggregate"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_env_with(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.market.volatility_pct, 30.0);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.greeks_mode, GreeksMode::Aggregate);
        assert_eq!(config.market.risk_free_pct, 5.0);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = CliConfig::default();
        let result = config.apply_env_with(|name| {
            (name == "PAYOFF_NUM_POINTS").then(|| "many".to_string())
        });
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_precedence_file_env_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "format = \"json\"\n[market]\nvolatility_pct = 25.0\nrisk_free_pct = 3.0\ndividend_pct = 1.0"
        )
        .unwrap();

        let env: HashMap<&str, &str> =
            [("PAYOFF_VOLATILITY_PCT", "40"), ("PAYOFF_RISK_FREE_PCT", "2")]
                .into_iter()
                .collect();
        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            volatility_pct: Some(55.0),
            ..Default::default()
        };

        let config = build_config_with(&cli, |name| env.get(name).map(|v| v.to_string())).unwrap();

        // CLI beats env, env beats file, file beats defaults
        assert_eq!(config.market.volatility_pct, 55.0);
        assert_eq!(config.market.risk_free_pct, 2.0);
        assert_eq!(config.market.dividend_pct, 1.0);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_merge_rejects_invalid_level() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("chatty".into()),
            ..Default::default()
        };
        assert!(config.merge_with_cli(&cli).is_err());
    }

    #[test]
    fn test_validate_market_defaults() {
        let mut config = CliConfig::default();
        config.market.volatility_pct = -1.0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.market.dividend_pct = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.market.risk_free_pct = -0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_from_settings() {
        let mut config = CliConfig::default();
        config.curve.num_points = 40;
        config.greeks_mode = GreeksMode::Aggregate;
        let engine = config.engine_config().unwrap();
        assert_eq!(engine.num_points(), 40);
        assert_eq!(engine.greeks_mode(), GreeksMode::Aggregate);
    }

    #[test]
    fn test_build_config_defaults_without_file() {
        let cli = CliArgs {
            config_file: None,
            ..Default::default()
        };
        // Runs from the crate directory, which carries no payoff.toml
        let config = build_config_with(&cli, no_env).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidFormat("xml".to_string());
        assert!(err.to_string().contains("Invalid output format"));

        let err = ConfigError::InvalidGreeksMode("sum".to_string());
        assert!(err.to_string().contains("primary, aggregate"));
    }
}
