use crate::pricing::RuleConfiguration;
use rust_decimal::Decimal;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub pricing: PricingSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            pricing: PricingSettings::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Default rule configuration and reference data location for the service.
#[derive(Debug, Clone, Default)]
pub struct PricingSettings {
    pub rules: RuleConfiguration,
    pub areas_csv: Option<PathBuf>,
}

impl PricingSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let mut rules = RuleConfiguration::default();

        if let Some(enabled) = env_setting::<bool>("PRICING_EXPIRY_ENABLED")? {
            rules.expiry_discount.enabled = enabled;
        }
        if let Some(days) = env_setting::<i64>("PRICING_EXPIRY_DAYS_THRESHOLD")? {
            rules.expiry_discount.days_threshold = days;
        }
        if let Some(pct) = env_percentage("PRICING_EXPIRY_DISCOUNT_PCT")? {
            rules.expiry_discount.discount_percentage = pct;
        }
        if let Some(enabled) = env_setting::<bool>("PRICING_DEMAND_ENABLED")? {
            rules.demand_surcharge.enabled = enabled;
        }
        if let Some(pct) = env_percentage("PRICING_DEMAND_INCREASE_PCT")? {
            rules.demand_surcharge.increase_percentage = pct;
        }
        if let Some(enabled) = env_setting::<bool>("PRICING_LOW_STOCK_ENABLED")? {
            rules.low_stock_surcharge.enabled = enabled;
        }
        if let Some(threshold) = env_setting::<i64>("PRICING_LOW_STOCK_THRESHOLD")? {
            rules.low_stock_surcharge.stock_threshold = threshold;
        }
        if let Some(pct) = env_percentage("PRICING_LOW_STOCK_INCREASE_PCT")? {
            rules.low_stock_surcharge.increase_percentage = pct;
        }
        if let Some(enabled) = env_setting::<bool>("PRICING_LOCATION_ENABLED")? {
            rules.location_adjustment.enabled = enabled;
        }

        let areas_csv = env::var("PRICING_AREAS_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { rules, areas_csv })
    }
}

fn env_setting<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .to_ascii_lowercase()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidSetting { key, value: raw }),
        _ => Ok(None),
    }
}

fn env_percentage(key: &'static str) -> Result<Option<Decimal>, ConfigError> {
    let Some(value) = env_setting::<Decimal>(key)? else {
        return Ok(None);
    };
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ConfigError::InvalidSetting {
            key,
            value: value.to_string(),
        });
    }
    Ok(Some(value))
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSetting { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSetting { key, value } => {
                write!(f, "{key} has an invalid value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidSetting { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
