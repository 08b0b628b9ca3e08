//! Configuration loading and typed config structures for the simulator.
//!
//! The configuration lives in `trapa-config.yaml` at the project root. Every
//! field has a default, so an empty or missing file yields a working
//! simulator listening on `0.0.0.0:5000`.

use std::path::Path;

use serde::Deserialize;
use trapa_types::ControlParameters;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration, mirroring `trapa-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulatorConfig {
    /// Initial parameters and particle seeding.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// HTTP service settings.
    #[serde(default)]
    pub observer: ObserverConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulatorConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override the observer address:
    /// - `OBSERVER_HOST` overrides `observer.host`
    /// - `OBSERVER_PORT` overrides `observer.port` (ignored if not a port)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.observer.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// Initial parameters are clamped to their domains.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.simulation.initial = config.simulation.initial.clamped();
        Ok(config)
    }
}

/// Simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Control parameters at startup. Missing fields use the built-in
    /// defaults (2.0 m, 0 %, nutrients 5, movement 5, summer).
    #[serde(default)]
    pub initial: ControlParameters,

    /// Fixed seed for particle placement. When absent each controller
    /// seeds from the operating system.
    #[serde(default)]
    pub particle_seed: Option<u64>,
}

/// HTTP service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObserverConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ObserverConfig {
    /// Override the address with `OBSERVER_HOST` / `OBSERVER_PORT` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("OBSERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("OBSERVER_PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
        {
            self.port = port;
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use trapa_types::Season;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulatorConfig::default();
        assert_eq!(config.simulation.initial, ControlParameters::default());
        assert_eq!(config.simulation.particle_seed, None);
        assert_eq!(config.observer.port, 5000);
        assert_eq!(config.observer.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
simulation:
  initial:
    water_depth_m: 3.5
    coverage_percent: 60
    nutrient_level: 8
    water_movement: 2
    season: fall
  particle_seed: 7

observer:
  host: "127.0.0.1"
  port: 9090

logging:
  level: "debug"
"#;

        let config = SimulatorConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.ok().unwrap_or_default();

        let initial = config.simulation.initial;
        assert!((initial.water_depth_m - 3.5).abs() < f64::EPSILON);
        assert!((initial.coverage_percent - 60.0).abs() < f64::EPSILON);
        assert_eq!(initial.nutrient_level, 8);
        assert_eq!(initial.water_movement, 2);
        assert_eq!(initial.season, Season::Fall);
        assert_eq!(config.simulation.particle_seed, Some(7));
        assert_eq!(config.observer.host, "127.0.0.1");
        assert_eq!(config.observer.port, 9090);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "simulation:\n  initial:\n    season: winter\n";
        let config = SimulatorConfig::parse(yaml).ok().unwrap_or_default();

        assert_eq!(config.simulation.initial.season, Season::Winter);
        // Everything else uses defaults
        assert_eq!(config.simulation.initial.nutrient_level, 5);
        assert!((config.simulation.initial.water_depth_m - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.observer.port, 5000);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulatorConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn out_of_range_initial_parameters_are_clamped() {
        let yaml = "simulation:\n  initial:\n    coverage_percent: 250\n    water_depth_m: 0.1\n";
        let config = SimulatorConfig::parse(yaml).ok().unwrap_or_default();
        assert!((config.simulation.initial.coverage_percent - 100.0).abs() < f64::EPSILON);
        assert!((config.simulation.initial.water_depth_m - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_season_is_a_yaml_error() {
        let yaml = "simulation:\n  initial:\n    season: monsoon\n";
        let result = SimulatorConfig::parse(yaml);
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("trapa-config.yaml");
        if path.exists() {
            let config = SimulatorConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
