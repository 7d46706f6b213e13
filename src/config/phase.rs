use super::pathset::{Error, Path, PathSet, Value};

/// Thresholds of the rollout and takeoff phases, speeds in knots of model speed
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PhaseConfig {
    pub rollout_entry: f32,
    pub rollout_exit: f32,
    pub takeoff_entry: f32,
    pub takeoff_exit: f32,
    /// Height above the runway that ends takeoff, ft
    pub acceleration_height: f32,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            rollout_entry: 70.0,
            rollout_exit: 40.0,
            takeoff_entry: 35.0,
            takeoff_exit: 20.0,
            acceleration_height: 1500.0,
        }
    }
}

impl PathSet for PhaseConfig {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "rollout-entry" => self.rollout_entry = value.parse()?,
            "rollout-exit" => self.rollout_exit = value.parse()?,
            "takeoff-entry" => self.takeoff_entry = value.parse()?,
            "takeoff-exit" => self.takeoff_exit = value.parse()?,
            "acceleration-height" => self.acceleration_height = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}
