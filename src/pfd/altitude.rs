use heapless::Vec;
#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

use crate::{
    config::{Subscale, TapeSpec},
    tape::{self, layout_target, TapeLayout, Target, TargetMode},
    types::{integer, padded, round, Text},
};

/// Vertical speed at which the readout box turns amber, ft/min
pub const SATURATION: f32 = 6000.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubscaleEntry {
    pub text: Text,
    pub position: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AltitudeTape {
    pub altitude: f32,
    pub tape: TapeLayout,
    pub target: Option<Target>,
    /// Off-tape target text is a flight level
    pub flight_level: bool,
    /// Hundreds of feet
    pub readout: Text,
    pub subscale: Vec<SubscaleEntry, 4>,
    pub saturated: bool,
}

fn subscale(altitude: f32, center: f32, drum: &Subscale) -> Vec<SubscaleEntry, 4> {
    let mut entries = Vec::new();
    let mut digits = altitude % 100.0 + drum.step * 2.0;
    let offset = (altitude % drum.step) * drum.spacing / drum.step;
    for i in -2..2 {
        let text = padded(((digits % 100.0) / drum.step).floor() as i32 * drum.step as i32, 2);
        let position = offset + i as f32 * drum.spacing + center;
        entries.push(SubscaleEntry { text, position }).ok();
        digits -= drum.step;
        if digits < 0.0 {
            digits += 100.0;
        }
    }
    entries
}

pub fn layout(
    altitude: f32,
    selected: Option<f32>,
    vertical_speed: Option<f32>,
    standard: bool,
    spec: &TapeSpec,
    drum: &Subscale,
) -> AltitudeTape {
    let target = layout_target(altitude, selected, spec, |mode| {
        let value = match (selected, standard) {
            (Some(selected), true) => round(selected / 100.0),
            (Some(selected), false) => round(selected),
            (None, _) => 0,
        };
        match mode {
            TargetMode::Marker => padded(value, 3),
            _ => integer(value),
        }
    });
    let off_tape = target.as_ref().map(|t| t.mode != TargetMode::Marker).unwrap_or(false);
    AltitudeTape {
        altitude,
        tape: tape::layout(altitude, spec),
        target,
        flight_level: standard && off_tape,
        readout: integer((altitude / 100.0).floor() as i32),
        subscale: subscale(altitude, spec.center(), drum),
        saturated: vertical_speed.map(|vs| vs.abs() >= SATURATION).unwrap_or(false),
    }
}

mod test {
    #[test]
    fn test_standard_target() {
        use super::layout;
        use crate::{
            config::{Subscale, TapeSpec},
            tape::TargetMode,
        };

        let (spec, drum) = (TapeSpec::altitude(), Subscale::default());
        let altitude = layout(5000.0, Some(10000.0), None, true, &spec, &drum);
        let target = altitude.target.unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelStart, 250.0));
        assert_eq!(target.text.as_str(), "100");
        assert!(altitude.flight_level);

        let altitude = layout(5000.0, Some(10000.0), None, false, &spec, &drum);
        assert_eq!(altitude.target.unwrap().text.as_str(), "10000");
        assert!(!altitude.flight_level);

        let altitude = layout(9800.0, Some(10000.0), None, true, &spec, &drum);
        let target = altitude.target.unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 420.0));
        assert_eq!(target.text.as_str(), "100");
        assert!(!altitude.flight_level);

        let altitude = layout(1000.0, Some(1200.0), None, true, &spec, &drum);
        assert_eq!(altitude.target.unwrap().text.as_str(), "012");
    }

    #[test]
    fn test_readout_and_saturation() {
        use super::layout;
        use crate::config::{Subscale, TapeSpec};

        let (spec, drum) = (TapeSpec::altitude(), Subscale::default());
        let altitude = layout(35980.0, None, Some(-6000.0), false, &spec, &drum);
        assert_eq!(altitude.readout.as_str(), "359");
        assert!(altitude.saturated);
        assert_eq!(altitude.target, None);

        let altitude = layout(-120.0, None, Some(5999.0), false, &spec, &drum);
        assert_eq!(altitude.readout.as_str(), "-2");
        assert!(!altitude.saturated);
    }

    #[test]
    fn test_subscale_drum() {
        use super::layout;
        use crate::config::{Subscale, TapeSpec};

        let (spec, drum) = (TapeSpec::altitude(), Subscale::default());
        let altitude = layout(10000.0, None, None, false, &spec, &drum);
        let entries: std::vec::Vec<(&str, f32)> =
            altitude.subscale.iter().map(|e| (e.text.as_str(), e.position)).collect();
        assert_eq!(entries, vec![("40", 456.0), ("20", 478.0), ("00", 500.0), ("80", 522.0)]);

        let altitude = layout(10030.0, None, None, false, &spec, &drum);
        let entries: std::vec::Vec<(&str, f32)> =
            altitude.subscale.iter().map(|e| (e.text.as_str(), e.position)).collect();
        assert_eq!(entries, vec![("60", 467.0), ("40", 489.0), ("20", 511.0), ("00", 533.0)]);
    }
}
