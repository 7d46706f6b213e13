pub mod unit;
pub mod vector;

use unit::Feet;

pub type Distance<T, U> = vector::Vector<T, U>;
pub type Velocity<T, U> = vector::Vector<T, U>;

pub type Altitude = Distance<f32, Feet>;

/// Sea level pressure of the standard atmosphere, hPa
pub const STANDARD_PRESSURE: f32 = 1013.25;
const FEET_PER_HPA: f32 = 30.0;

/// Altimeter setting in hPa (millibar)
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pressure(pub f32);

impl Pressure {
    /// Altitude offset of this setting against the standard atmosphere.
    pub fn correction(self) -> Altitude {
        Altitude::new((self.0 - STANDARD_PRESSURE) * FEET_PER_HPA, Feet)
    }
}

mod test {
    #[test]
    fn test_qnh_correction() {
        use super::{unit::Feet, Altitude, Pressure};

        assert_eq!(Pressure(1003.25).correction(), Altitude::new(-300.0, Feet));
        assert_eq!(Pressure(1013.25).correction(), Altitude::new(0.0, Feet));
        assert_eq!(Pressure(1023.25).correction(), Altitude::new(300.0, Feet));
    }

    #[test]
    fn test_distance_unit_convert() {
        use super::{
            unit::{Feet, FlightLevel, FTmin, HFTmin},
            Altitude, Velocity,
        };

        let altitude = Altitude::new(10000.0, Feet);
        assert_eq!(altitude.u(FlightLevel).raw, 100.0);
        assert_eq!(Altitude::new(-250.0, Feet).u(FlightLevel).raw, -2.5);

        let vario = Velocity::new(1500.0, FTmin);
        assert_eq!(vario.u(HFTmin).raw, 15.0);
    }
}
