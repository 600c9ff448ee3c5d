//! An ordered collection of wrapped vehicles, and the TOML file describing it.
//!
//! ```toml
//! throttle = 3
//! vehicles = ["car", "airplane"]
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::FleetError;
use crate::models::{AirPlane, Car};
use crate::vehicle::{Accelerate, SpeedChange, Vehicle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    AirPlane,
}

impl VehicleKind {
    pub fn build(self) -> Vehicle {
        match self {
            VehicleKind::Car => Vehicle::new(Car),
            VehicleKind::AirPlane => Vehicle::new(AirPlane),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FleetConfig {
    pub vehicles: Vec<VehicleKind>,
    /// Argument passed to every `accelerate` call.
    pub throttle: i32,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            vehicles: vec![VehicleKind::Car, VehicleKind::AirPlane],
            throttle: 3,
        }
    }
}

impl FleetConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, FleetError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, FleetError> {
        let content = fs::read_to_string(path).map_err(|err| FleetError::read(path, err))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "loaded {} vehicle(s) from {}",
            config.vehicles.len(),
            path.display()
        );
        Ok(config)
    }
}

#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FleetConfig) -> Self {
        let vehicles = config.vehicles.iter().map(|kind| kind.build()).collect();
        Self { vehicles }
    }

    pub fn push<T>(&mut self, payload: T)
    where
        T: Accelerate + 'static,
    {
        self.vehicles.push(Vehicle::new(payload));
    }

    /// Accelerates every vehicle in insertion order.
    pub fn accelerate_all(&self, x: i32) -> Vec<SpeedChange> {
        debug!("accelerating {} vehicle(s) by {x}", self.vehicles.len());
        self.vehicles.iter().map(|v| v.accelerate(x)).collect()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    struct Bicycle {
        riders: i32,
    }

    impl Accelerate for Bicycle {
        fn accelerate(&self, x: i32) -> SpeedChange {
            SpeedChange {
                vehicle: "bicycle",
                delta: x / self.riders,
            }
        }
    }

    #[test]
    fn test_default_fleet_matches_demo() {
        init_logger();
        let config = FleetConfig::default();
        let fleet = Fleet::from_config(&config);
        let lines: Vec<String> = fleet
            .accelerate_all(config.throttle)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            ["car increasing speed by 3", "plane increasing speed by 6"]
        );
    }

    #[test]
    fn test_order_follows_config() {
        let config =
            FleetConfig::from_toml_str(r#"vehicles = ["airplane", "car", "car"]"#).unwrap();
        assert_eq!(config.throttle, 3);

        let fleet = Fleet::from_config(&config);
        assert_eq!(fleet.len(), 3);
        let labels: Vec<_> = fleet.accelerate_all(1).iter().map(|c| c.vehicle).collect();
        assert_eq!(labels, ["plane", "car", "car"]);
    }

    #[test]
    fn test_push_custom_payload() {
        let mut fleet = Fleet::new();
        assert!(fleet.is_empty());
        fleet.push(Car);
        fleet.push(Bicycle { riders: 2 });
        fleet.push(AirPlane);

        let deltas: Vec<_> = fleet.accelerate_all(10).iter().map(|c| c.delta).collect();
        assert_eq!(deltas, [10, 5, 20]);
    }

    #[test]
    fn test_empty_config_builds_empty_fleet() {
        let config = FleetConfig::from_toml_str("vehicles = []\nthrottle = 9").unwrap();
        let fleet = Fleet::from_config(&config);
        assert!(fleet.is_empty());
        assert!(fleet.accelerate_all(config.throttle).is_empty());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = FleetConfig::from_toml_str(r#"vehicles = ["boat"]"#).unwrap_err();
        assert!(matches!(err, FleetError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = FleetConfig::from_toml_str("speed = 3").unwrap_err();
        assert!(err.to_string().starts_with("Invalid fleet config"));
    }

    #[test]
    fn test_load_from_file() {
        init_logger();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "throttle = -2").unwrap();
        writeln!(file, r#"vehicles = ["car", "airplane"]"#).unwrap();

        let config = FleetConfig::load(file.path()).unwrap();
        let deltas: Vec<_> = Fleet::from_config(&config)
            .accelerate_all(config.throttle)
            .iter()
            .map(|c| c.delta)
            .collect();
        assert_eq!(deltas, [-2, -4]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        let err = FleetConfig::load(&path).unwrap_err();
        assert!(matches!(err, FleetError::Read { .. }));
        assert!(err.to_string().contains("fleet.toml"));
    }
}
