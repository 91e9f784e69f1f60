use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::models::{Anomaly, Driver, DriverSet};

/// Root configuration structure, deserialized from `.heat-sentinel/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Driver plausibility rules.
    pub checks: CheckConfig,
}

/// Defines how implausible driver values are handled.
///
/// Checks never change a score; the engine clamps whatever it is given.
/// They exist so data-quality problems in the fixture table surface as
/// warnings (or a failing exit code) instead of vanishing into the clamp.
#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    /// What to do when a driver value falls outside its bounds.
    /// Defaults to `warn`.
    #[serde(default = "default_check_action")]
    pub action: CheckAction,
    /// Per-driver bounds keyed by driver name (e.g. `"temperature"`).
    #[serde(default)]
    pub bounds: HashMap<String, Bounds>,
}

fn default_check_action() -> CheckAction {
    CheckAction::Warn
}

/// Inclusive plausibility range for one driver.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// The action to take when a driver value is implausible.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckAction {
    /// Accept silently (the original garbage-in, garbage-out behavior).
    Ignore,
    /// Report the anomaly alongside the assessment.
    Warn,
    /// Report the anomaly and exit with code 1.
    Error,
}

impl Default for Config {
    /// Built-in bounds used when no config file is found.
    ///
    /// Wide enough for any real reading in the district; the 70 °C and
    /// 60 °C temperature fixtures fall outside and get flagged.
    fn default() -> Self {
        let mut bounds = HashMap::new();
        bounds.insert(Driver::Temperature.key().to_string(), Bounds { min: -10.0, max: 55.0 });
        bounds.insert(Driver::Humidity.key().to_string(), Bounds { min: 0.0, max: 100.0 });
        bounds.insert(Driver::GreenCoverPct.key().to_string(), Bounds { min: 0.0, max: 100.0 });
        bounds.insert(Driver::TrafficIndex.key().to_string(), Bounds { min: 0.0, max: 200.0 });
        bounds.insert(
            Driver::AirQualityIndex.key().to_string(),
            Bounds { min: 0.0, max: 500.0 },
        );
        bounds.insert(
            Driver::PrecipitationMm.key().to_string(),
            Bounds { min: 0.0, max: 500.0 },
        );

        Config {
            checks: CheckConfig { action: CheckAction::Warn, bounds },
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.heat-sentinel/config.toml`
/// 3. `~/.config/heat-sentinel/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = Path::new(".heat-sentinel").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("heat-sentinel").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

/// Check every driver against its configured bounds.
///
/// Returns one [`Anomaly`] per out-of-bounds driver; drivers with no
/// configured bounds are accepted as-is. Returns nothing when the action
/// is [`CheckAction::Ignore`].
pub fn run_checks(config: &Config, drivers: &DriverSet) -> Vec<Anomaly> {
    if config.checks.action == CheckAction::Ignore {
        return Vec::new();
    }

    drivers
        .iter()
        .filter_map(|(driver, value)| {
            let bounds = config.checks.bounds.get(driver.key())?;
            if value < bounds.min || value > bounds.max {
                Some(Anomaly { driver, value, min: bounds.min, max: bounds.max })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn plausible_drivers() -> DriverSet {
        DriverSet {
            temperature: 39.0,
            humidity: 58.0,
            green_cover_pct: 25.0,
            traffic_index: 80.0,
            air_quality_index: 65.0,
            precipitation_mm: 6.0,
        }
    }

    #[test]
    fn test_plausible_values_pass_default_bounds() {
        let cfg = Config::default();
        assert!(run_checks(&cfg, &plausible_drivers()).is_empty());
    }

    #[test]
    fn test_seventy_degrees_is_flagged() {
        let cfg = Config::default();
        let mut drivers = plausible_drivers();
        drivers.temperature = 70.0;
        let anomalies = run_checks(&cfg, &drivers);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].driver, Driver::Temperature);
        assert_eq!(anomalies[0].max, 55.0);
    }

    #[test]
    fn test_negative_green_cover_is_flagged() {
        let cfg = Config::default();
        let mut drivers = plausible_drivers();
        drivers.green_cover_pct = -5.0;
        let anomalies = run_checks(&cfg, &drivers);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].driver, Driver::GreenCoverPct);
    }

    #[test]
    fn test_ignore_action_suppresses_anomalies() {
        let mut cfg = Config::default();
        cfg.checks.action = CheckAction::Ignore;
        let mut drivers = plausible_drivers();
        drivers.temperature = 500.0;
        assert!(run_checks(&cfg, &drivers).is_empty());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[checks]\naction = \"error\"\n\n[checks.bounds.temperature]\nmin = 0.0\nmax = 45.0\n"
        )
        .unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.checks.action, CheckAction::Error);

        let mut drivers = plausible_drivers();
        drivers.temperature = 46.0;
        let anomalies = run_checks(&cfg, &drivers);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].max, 45.0);
        // Only temperature has bounds in this config; other drivers pass.
        drivers.temperature = 40.0;
        drivers.humidity = 400.0;
        assert!(run_checks(&cfg, &drivers).is_empty());
    }

    #[test]
    fn test_missing_override_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
