pub mod target;

use heapless::Vec;
#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

use crate::{
    config::{LabelFormat, Orientation, TapeSpec},
    types::{integer, padded, round, Text},
};

pub use target::{layout_target, Target, TargetMode};

pub const MAX_TICKS: usize = 64;
pub const MAX_LABELS: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub value: f32,
    pub position: f32,
    pub major: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub value: f32,
    pub position: f32,
    pub text: Text,
    pub big: bool,
}

/// Ticks and labels in ascending pixel order
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TapeLayout {
    pub ticks: Vec<Tick, MAX_TICKS>,
    pub labels: Vec<Label, MAX_LABELS>,
    /// Pixel of the floor value when visible
    pub floor: Option<f32>,
}

fn is_multiple(value: f32, interval: f32) -> bool {
    if interval <= 0.0 {
        return false;
    }
    let ratio = value / interval;
    (ratio - ratio.round()).abs() < 1e-4
}

/// Multiples of `interval` within `current ± half_range`, ascending pixel order.
///
/// Beyond `capacity` the window is narrowed evenly on both sides so it stays centered.
fn steps(current: f32, spec: &TapeSpec, interval: f32, capacity: usize) -> Vec<f32, MAX_TICKS> {
    if interval <= 0.0 {
        return Vec::new();
    }
    let half_range = spec.half_range();
    let mut first = ((current - half_range) / interval).ceil() as i32;
    let mut last = ((current + half_range) / interval).floor() as i32;
    if let Some(floor) = spec.floor {
        first = first.max((floor / interval).ceil() as i32);
    }
    let capacity = capacity.min(MAX_TICKS) as i32;
    let excess = last - first + 1 - capacity;
    if excess > 0 {
        first += excess / 2;
        last -= excess - excess / 2;
    }
    let values = (first..=last).map(|k| k as f32 * interval);
    match spec.orientation {
        Orientation::Vertical => values.rev().take(MAX_TICKS).collect(),
        Orientation::Horizontal => values.take(MAX_TICKS).collect(),
    }
}

fn label_text(value: f32, spec: &TapeSpec) -> (Text, bool) {
    let scaled = round(value / spec.label_divisor);
    let width = spec.label_width as usize;
    match spec.label_format {
        LabelFormat::Padded => (padded(scaled, width), false),
        LabelFormat::Absolute => (padded(scaled.abs(), width), false),
        LabelFormat::Compass => {
            let mut tens = scaled % 36;
            if tens < 0 {
                tens += 36;
            }
            (integer(tens), is_multiple(value, 30.0))
        }
    }
}

pub fn layout(current: f32, spec: &TapeSpec) -> TapeLayout {
    let mut tape = TapeLayout::default();
    for &value in steps(current, spec, spec.minor_interval, MAX_TICKS).iter() {
        let position = spec.position(current, value);
        let major = is_multiple(value, spec.major_interval);
        tape.ticks.push(Tick { value, position, major }).ok();
    }
    for &value in steps(current, spec, spec.label_interval, MAX_LABELS).iter() {
        let position = spec.position(current, value);
        let (text, big) = label_text(value, spec);
        tape.labels.push(Label { value, position, text, big }).ok();
    }
    let half_range = spec.half_range();
    tape.floor = spec
        .floor
        .filter(|&f| current - half_range <= f && f <= current + half_range)
        .map(|f| spec.position(current, f));
    tape
}

mod test {
    #[cfg(test)]
    fn texts(tape: &super::TapeLayout) -> std::vec::Vec<&str> {
        tape.labels.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_speed_tape_symmetry() {
        use super::layout;
        use crate::config::TapeSpec;

        let tape = layout(250.0, &TapeSpec::speed());
        let values: std::vec::Vec<f32> = tape.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![290.0, 280.0, 270.0, 260.0, 250.0, 240.0, 230.0, 220.0, 210.0]);
        let center = tape.ticks.iter().find(|t| t.value == 250.0).unwrap();
        assert_eq!(center.position, 500.0);
        assert!(!center.major);
        assert!(tape.ticks[3].major);
        for tick in tape.ticks.iter() {
            let mirror = 500.0 - (tick.position - 500.0);
            assert!(tape.ticks.iter().any(|t| t.position == mirror));
        }

        assert_eq!(texts(&tape), vec!["280", "260", "240", "220"]);
        assert_eq!(tape.labels[1].position, 440.0);
        assert_eq!(tape.labels[2].position, 560.0);
        assert_eq!(tape.floor, None);
    }

    #[test]
    fn test_speed_floor() {
        use super::layout;
        use crate::config::TapeSpec;

        let tape = layout(20.0, &TapeSpec::speed());
        assert_eq!(tape.ticks.last().map(|t| t.value), Some(0.0));
        assert!(tape.ticks.iter().all(|t| t.value >= 0.0));
        assert_eq!(texts(&tape), vec!["060", "040", "020", "000"]);
        assert_eq!(tape.floor, Some(620.0));
    }

    #[test]
    fn test_altitude_labels() {
        use super::layout;
        use crate::config::TapeSpec;

        let tape = layout(10000.0, &TapeSpec::altitude());
        assert_eq!(texts(&tape), vec!["105", "100", "095"]);
        assert_eq!(tape.labels[0].position, 300.0);
        assert_eq!(tape.labels[1].position, 500.0);
        assert_eq!(tape.ticks.len(), 13);

        let tape = layout(-300.0, &TapeSpec::altitude());
        assert_eq!(texts(&tape), vec!["000", "005"]);
    }

    #[test]
    fn test_dense_tape_stays_centered() {
        use super::{layout, MAX_LABELS, MAX_TICKS};
        use crate::config::TapeSpec;

        let spec = TapeSpec { minor_interval: 10.0, label_interval: 10.0, ..TapeSpec::altitude() };
        let tape = layout(10000.0, &spec);
        assert_eq!(tape.ticks.len(), MAX_TICKS);
        assert_eq!(tape.ticks.first().map(|t| t.value), Some(10310.0));
        assert_eq!(tape.ticks.last().map(|t| t.value), Some(9680.0));
        let center = tape.ticks.iter().find(|t| t.value == 10000.0).unwrap();
        assert_eq!(center.position, 500.0);

        assert_eq!(tape.labels.len(), MAX_LABELS);
        assert_eq!(tape.labels.first().map(|l| l.value), Some(10150.0));
        assert_eq!(tape.labels.last().map(|l| l.value), Some(9840.0));
    }

    #[test]
    fn test_heading_wrap() {
        use super::layout;
        use crate::config::TapeSpec;

        let tape = layout(5.0, &TapeSpec::heading());
        assert_eq!(texts(&tape), vec!["35", "0", "1", "2"]);
        let north = tape.labels.iter().find(|l| l.text.as_str() == "0").unwrap();
        assert_eq!(north.position, 400.0);
        assert!(north.big);
        assert!(!tape.labels[0].big);
        let values: std::vec::Vec<f32> = tape.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![-15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
        assert!(tape.ticks[1].major);
        assert!(!tape.ticks[2].major);

        let tape = layout(355.0, &TapeSpec::heading());
        assert_eq!(texts(&tape), vec!["34", "35", "0", "1"]);
        assert!(tape.labels[2].big);
    }
}
