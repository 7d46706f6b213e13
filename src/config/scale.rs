use super::pathset::{Error, Path, PathSet, Value};
use crate::types::Point;

/// Non-linear vertical speed scale, ft/min against multiples of `spacing` pixels
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VerticalSpeedSpec {
    pub top: f32,
    pub height: f32,
    pub spacing: f32,
    /// Readout shown above this rate
    pub text_threshold: f32,
}

impl VerticalSpeedSpec {
    pub fn center(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

impl Default for VerticalSpeedSpec {
    fn default() -> Self {
        Self { top: 190.0, height: 620.0, spacing: 35.0, text_threshold: 200.0 }
    }
}

impl PathSet for VerticalSpeedSpec {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "top" => self.top = value.parse()?,
            "height" => self.height = value.parse()?,
            "spacing" => self.spacing = value.parse()?,
            "text-threshold" => self.text_threshold = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RollScaleSpec {
    pub center: Point,
    pub radius: f32,
    /// Radio altitude shown at or below, ft
    pub radio_altitude_max: f32,
    pub radio_altitude_low: f32,
}

impl Default for RollScaleSpec {
    fn default() -> Self {
        Self {
            center: Point::new(440.0, 500.0),
            radius: 250.0,
            radio_altitude_max: 2500.0,
            radio_altitude_low: 100.0,
        }
    }
}

impl PathSet for RollScaleSpec {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "center" => match path.str()? {
                "x" => self.center.x = value.parse()?,
                "y" => self.center.y = value.parse()?,
                _ => return Err(Error::UnknownPath),
            },
            "radius" => self.radius = value.parse()?,
            "radio-altitude-max" => self.radio_altitude_max = value.parse()?,
            "radio-altitude-low" => self.radio_altitude_low = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

/// Rolling last-two-digits drum next to the altitude readout
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Subscale {
    pub spacing: f32,
    /// ft per entry
    pub step: f32,
}

impl Default for Subscale {
    fn default() -> Self {
        Self { spacing: 22.0, step: 20.0 }
    }
}

impl PathSet for Subscale {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "spacing" => self.spacing = value.parse()?,
            "step" => self.step = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

/// QNH band, hPa, treated as standard pressure: `lower <= qnh < upper`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StandardPressure {
    pub lower: f32,
    pub upper: f32,
}

impl StandardPressure {
    pub fn contains(&self, qnh: f32) -> bool {
        self.lower <= qnh && qnh < self.upper
    }
}

impl Default for StandardPressure {
    fn default() -> Self {
        Self { lower: 1012.0, upper: 1014.0 }
    }
}

impl PathSet for StandardPressure {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "lower" => self.lower = value.parse()?,
            "upper" => self.upper = value.parse()?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

mod test {
    #[test]
    fn test_standard_pressure_band() {
        use super::StandardPressure;

        let band = StandardPressure::default();
        assert!(band.contains(1012.0));
        assert!(band.contains(1013.25));
        assert!(!band.contains(1014.0));
        assert!(!band.contains(1011.9));
    }
}
