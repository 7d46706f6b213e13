use core::str::FromStr;

use super::pathset::{Error, Path, PathSet, Value};
use crate::tape::{MAX_LABELS, MAX_TICKS};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Values grow upwards
    Vertical,
    /// Values grow to the right
    Horizontal,
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, ()> {
        match string {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelFormat {
    /// value / divisor, zero padded
    Padded,
    /// |value / divisor|, zero padded
    Absolute,
    /// Tens of degrees modulo 36
    Compass,
}

impl FromStr for LabelFormat {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, ()> {
        match string {
            "padded" => Ok(Self::Padded),
            "absolute" => Ok(Self::Absolute),
            "compass" => Ok(Self::Compass),
            _ => Err(()),
        }
    }
}

/// Geometry and scale of a moving tape, pixels unless noted
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TapeSpec {
    pub orientation: Orientation,
    /// Top edge of a vertical tape, left edge of a horizontal one
    pub origin: f32,
    pub length: f32,
    pub pixels_per_unit: f32,
    pub minor_interval: f32,
    pub major_interval: f32,
    pub label_interval: f32,
    pub label_format: LabelFormat,
    pub label_divisor: f32,
    pub label_width: u8,
    /// Values below are never drawn
    pub floor: Option<f32>,
}

impl TapeSpec {
    pub fn speed() -> Self {
        Self {
            orientation: Orientation::Vertical,
            origin: 250.0,
            length: 500.0,
            pixels_per_unit: 6.0,
            minor_interval: 10.0,
            major_interval: 20.0,
            label_interval: 20.0,
            label_format: LabelFormat::Padded,
            label_divisor: 1.0,
            label_width: 3,
            floor: Some(0.0),
        }
    }

    pub fn altitude() -> Self {
        Self {
            orientation: Orientation::Vertical,
            origin: 250.0,
            length: 500.0,
            pixels_per_unit: 0.4,
            minor_interval: 100.0,
            major_interval: 500.0,
            label_interval: 500.0,
            label_format: LabelFormat::Absolute,
            label_divisor: 100.0,
            label_width: 3,
            floor: None,
        }
    }

    pub fn heading() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            origin: 225.0,
            length: 450.0,
            pixels_per_unit: 10.0,
            minor_interval: 5.0,
            major_interval: 10.0,
            label_interval: 10.0,
            label_format: LabelFormat::Compass,
            label_divisor: 10.0,
            label_width: 0,
            floor: None,
        }
    }

    pub fn start(&self) -> f32 {
        self.origin
    }

    pub fn end(&self) -> f32 {
        self.origin + self.length
    }

    pub fn center(&self) -> f32 {
        self.origin + self.length / 2.0
    }

    /// Distance in units between the center and either edge
    pub fn half_range(&self) -> f32 {
        self.length / 2.0 / self.pixels_per_unit
    }

    /// Steps of `interval` the visible window may hold
    pub fn steps(&self, interval: f32) -> usize {
        if interval <= 0.0 {
            return 0;
        }
        (2.0 * self.half_range() / interval + 1.0) as usize
    }

    /// Whether every tick and label of the window fits the layout capacity
    pub fn fits(&self) -> bool {
        self.pixels_per_unit > 0.0
            && self.steps(self.minor_interval) <= MAX_TICKS
            && self.steps(self.label_interval) <= MAX_LABELS
    }

    /// Pixel where `value` is drawn while the tape shows `current` at its center.
    pub fn position(&self, current: f32, value: f32) -> f32 {
        match self.orientation {
            Orientation::Vertical => self.center() + (current - value) * self.pixels_per_unit,
            Orientation::Horizontal => self.center() + (value - current) * self.pixels_per_unit,
        }
    }
}

impl PathSet for TapeSpec {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        let saved = *self;
        match path.str()? {
            "orientation" => self.orientation = value.parse()?,
            "origin" => self.origin = value.parse()?,
            "length" => self.length = value.parse()?,
            "pixels-per-unit" => self.pixels_per_unit = value.parse()?,
            "minor-interval" => self.minor_interval = value.parse()?,
            "major-interval" => self.major_interval = value.parse()?,
            "label-interval" => self.label_interval = value.parse()?,
            "label-format" => self.label_format = value.parse()?,
            "label-divisor" => self.label_divisor = value.parse()?,
            "label-width" => self.label_width = value.parse()?,
            "floor" => self.floor = value.parse_option()?,
            _ => return Err(Error::UnknownPath),
        }
        if !self.fits() {
            *self = saved;
            return Err(Error::InvalidValue);
        }
        Ok(())
    }
}

mod test {
    #[test]
    fn test_tape_geometry() {
        use super::TapeSpec;

        let speed = TapeSpec::speed();
        assert_eq!(speed.center(), 500.0);
        assert_eq!(speed.end(), 750.0);
        assert_eq!(speed.position(250.0, 250.0), 500.0);
        assert_eq!(speed.position(250.0, 260.0), 440.0);

        let heading = TapeSpec::heading();
        assert_eq!(heading.center(), 450.0);
        assert_eq!(heading.half_range(), 22.5);
        assert_eq!(heading.position(90.0, 95.0), 500.0);
    }

    #[test]
    fn test_reject_dense_tape() {
        use super::TapeSpec;
        use crate::config::pathset::{Error, Path, PathSet, Value};

        let mut altitude = TapeSpec::altitude();
        assert_eq!(altitude.steps(altitude.minor_interval), 13);
        let result = altitude.set(Path::from("minor-interval"), Value::of("10"));
        assert_eq!(result, Err(Error::InvalidValue));
        assert_eq!(altitude, TapeSpec::altitude());

        let result = altitude.set(Path::from("pixels-per-unit"), Value::of("0"));
        assert_eq!(result, Err(Error::InvalidValue));
        assert_eq!(altitude.set(Path::from("minor-interval"), Value::of("20")), Ok(()));
        assert_eq!(altitude.steps(altitude.minor_interval), 63);
    }
}
