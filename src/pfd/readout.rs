use core::fmt::Write;

use crate::{
    config::StandardPressure,
    types::{measurement::Pressure, round, Text},
};

/// Mach readout comes on at this number
pub const MACH_THRESHOLD: f32 = 0.45;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PressureSetting {
    pub standard: bool,
    pub text: Text,
}

pub fn pressure(qnh: Pressure, band: &StandardPressure) -> PressureSetting {
    let mut text = Text::new();
    let standard = band.contains(qnh.0);
    if standard {
        text.push_str("STD").ok();
    } else {
        write!(text, "QNH {}", round(qnh.0)).ok();
    }
    PressureSetting { standard, text }
}

/// Three decimals without the leading zero, two decimals once it rounds to 1 or more
pub fn mach(mach: f32) -> Option<Text> {
    if mach < MACH_THRESHOLD {
        return None;
    }
    let mut text = Text::new();
    let thousandths = round(mach * 1000.0);
    if thousandths < 1000 {
        write!(text, ".{:03}", thousandths).ok();
    } else {
        write!(text, "{:.2}", mach).ok();
    }
    Some(text)
}

mod test {
    #[test]
    fn test_pressure_setting() {
        use super::pressure;
        use crate::{config::StandardPressure, types::measurement::Pressure};

        let band = StandardPressure::default();
        let setting = pressure(Pressure(1013.25), &band);
        assert!(setting.standard);
        assert_eq!(setting.text.as_str(), "STD");
        let setting = pressure(Pressure(1003.4), &band);
        assert!(!setting.standard);
        assert_eq!(setting.text.as_str(), "QNH 1003");
        assert_eq!(pressure(Pressure(1014.0), &band).text.as_str(), "QNH 1014");
    }

    #[test]
    fn test_mach_format() {
        use super::mach;

        assert_eq!(mach(0.44), None);
        assert_eq!(mach(0.45).as_ref().map(|t| t.as_str()), Some(".450"));
        assert_eq!(mach(0.785).as_ref().map(|t| t.as_str()), Some(".785"));
        assert_eq!(mach(1.2).as_ref().map(|t| t.as_str()), Some("1.20"));
        assert_eq!(mach(0.9994).as_ref().map(|t| t.as_str()), Some(".999"));
        assert_eq!(mach(0.9996).as_ref().map(|t| t.as_str()), Some("1.00"));
    }
}
