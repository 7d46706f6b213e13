pub mod pathset;
pub mod phase;
pub mod scale;
pub mod tape;

pub use pathset::{Path, PathSet, Value};
pub use phase::PhaseConfig;
pub use scale::{RollScaleSpec, StandardPressure, Subscale, VerticalSpeedSpec};
pub use tape::{LabelFormat, Orientation, TapeSpec};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub phase: PhaseConfig,
    pub speed: TapeSpec,
    pub altitude: TapeSpec,
    pub subscale: Subscale,
    pub heading: TapeSpec,
    pub vertical_speed: VerticalSpeedSpec,
    pub roll: RollScaleSpec,
    pub pressure: StandardPressure,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phase: Default::default(),
            speed: TapeSpec::speed(),
            altitude: TapeSpec::altitude(),
            subscale: Default::default(),
            heading: TapeSpec::heading(),
            vertical_speed: Default::default(),
            roll: Default::default(),
            pressure: Default::default(),
        }
    }
}

impl core::fmt::Display for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        serde_json_core_fmt::to_fmt(f, self)
    }
}

impl PathSet for Config {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), pathset::Error> {
        match path.str()? {
            "phase" => self.phase.set(path, value),
            "speed" => self.speed.set(path, value),
            "altitude" => self.altitude.set(path, value),
            "subscale" => self.subscale.set(path, value),
            "heading" => self.heading.set(path, value),
            "vertical-speed" => self.vertical_speed.set(path, value),
            "roll" => self.roll.set(path, value),
            "pressure" => self.pressure.set(path, value),
            _ => Err(pathset::Error::UnknownPath),
        }
    }
}

mod test {
    #[test]
    fn test_set_config_path() {
        use super::pathset::{Error, Path, PathSet, Value};
        use super::{Config, LabelFormat};

        let mut config = Config::default();
        assert_eq!(config.set(Path::from("altitude.label-interval"), Value::of("1000")), Ok(()));
        assert_eq!(config.altitude.label_interval, 1000.0);
        assert_eq!(config.set(Path::from("speed.floor"), Value::of("none")), Ok(()));
        assert_eq!(config.speed.floor, None);
        assert_eq!(config.set(Path::from("heading.label-format"), Value::of("padded")), Ok(()));
        assert_eq!(config.heading.label_format, LabelFormat::Padded);
        assert_eq!(config.set(Path::from("roll.center.x"), Value::of("400")), Ok(()));
        assert_eq!(config.roll.center.x, 400.0);
        assert_eq!(config.set(Path::from("phase.takeoff-exit"), Value::of("25")), Ok(()));
        assert_eq!(config.phase.takeoff_exit, 25.0);

        let result = config.set(Path::from("altitude.unknown"), Value::of("1"));
        assert_eq!(result, Err(Error::UnknownPath));
        let result = config.set(Path::from("speed.length"), Value::of("long"));
        assert_eq!(result, Err(Error::InvalidValue));
        let result = config.set(Path::from("speed.length"), Value(None));
        assert_eq!(result, Err(Error::ExpectValue));
    }

    #[test]
    fn test_config_json() {
        use super::Config;

        let json = r#"{"phase": {"acceleration-height": 1000.0}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.phase.acceleration_height, 1000.0);
        assert_eq!(config.phase.rollout_entry, 70.0);
        assert_eq!(config.speed, Config::default().speed);

        let text = config.to_string();
        let parsed: Config = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
