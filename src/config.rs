use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub payment: PaymentSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Points per shared attribute; the defaults are the scoring contract.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: i64,
    #[serde(default = "default_driving_times_weight")]
    pub driving_times: i64,
    #[serde(default = "default_major_weight")]
    pub major: i64,
    #[serde(default = "default_extracurriculars_weight")]
    pub extracurriculars: i64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            driving_times: default_driving_times_weight(),
            major: default_major_weight(),
            extracurriculars: default_extracurriculars_weight(),
        }
    }
}

fn default_location_weight() -> i64 {
    3
}
fn default_driving_times_weight() -> i64 {
    2
}
fn default_major_weight() -> i64 {
    2
}
fn default_extracurriculars_weight() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSettings {
    #[serde(default = "default_fuel_efficiency_mpg")]
    pub fuel_efficiency_mpg: f64,
    #[serde(default = "default_base_fare")]
    pub base_fare: f64,
    #[serde(default = "default_wear_rate_per_mile")]
    pub wear_rate_per_mile: f64,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            fuel_efficiency_mpg: default_fuel_efficiency_mpg(),
            base_fare: default_base_fare(),
            wear_rate_per_mile: default_wear_rate_per_mile(),
        }
    }
}

fn default_fuel_efficiency_mpg() -> f64 {
    24.0
}
fn default_base_fare() -> f64 {
    2.5
}
fn default_wear_rate_per_mile() -> f64 {
    0.12
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RIDESHARE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RIDESHARE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RIDESHARE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.location, 3);
        assert_eq!(weights.driving_times, 2);
        assert_eq!(weights.major, 2);
        assert_eq!(weights.extracurriculars, 1);
    }

    #[test]
    fn test_default_payment_parameters() {
        let payment = PaymentSettings::default();
        assert_eq!(payment.fuel_efficiency_mpg, 24.0);
        assert_eq!(payment.base_fare, 2.5);
        assert_eq!(payment.wear_rate_per_mile, 0.12);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
