use core::f32::consts::PI;

use heapless::Vec;
use nalgebra::{Rotation2, Vector2};

use crate::{
    config::RollScaleSpec,
    types::{integer, round, Point, Text},
};

/// Gap between the roll pointer tip and the scale arc
const POINTER_OFFSET: f32 = 4.0;
const BIG_MARK: f32 = 18.0;
const SMALL_MARK: f32 = 10.0;
/// Pixels per 5 degrees of pitch
const LADDER_SPACING: f32 = 50.0;
/// Half width of a 2.5 degree rung
const QUARTER_RUNG: f32 = 15.0;
const LABEL_GAP: f32 = 10.0;
const WING_LENGTH: f32 = 20.0;
const WING_GAP: f32 = 3.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkKind {
    Line,
    Box,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RollMark {
    /// Degrees, positive to the right of the zero pointer
    pub angle: f32,
    pub kind: MarkKind,
    pub inner: Point,
    pub outer: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadioAltitude {
    pub text: Text,
    pub low: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

/// Text beside both ends of a ladder rung
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PitchLabel {
    pub text: &'static str,
    /// Right end of the left hand text
    pub left: Point,
    /// Left end of the right hand text
    pub right: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attitude {
    pub roll: f32,
    /// Radians applied to the horizon, opposite to the roll
    pub rotation: f32,
    pub horizon: Line,
    pub pointer: Point,
    pub marks: Vec<RollMark, 8>,
    /// Pitch ladder rungs, rolled with the horizon
    pub ladder: Vec<Line, 18>,
    pub ladder_labels: Vec<PitchLabel, 4>,
    pub wings: Vec<Line, 4>,
    pub radio_altitude: Option<RadioAltitude>,
}

const ROLL_MARKS: [(f32, MarkKind, f32); 8] = [
    (45.0, MarkKind::Line, BIG_MARK),
    (30.0, MarkKind::Box, BIG_MARK),
    (20.0, MarkKind::Box, SMALL_MARK),
    (10.0, MarkKind::Box, SMALL_MARK),
    (-10.0, MarkKind::Box, SMALL_MARK),
    (-20.0, MarkKind::Box, SMALL_MARK),
    (-30.0, MarkKind::Box, BIG_MARK),
    (-45.0, MarkKind::Line, BIG_MARK),
];

fn to_point(center: &Point, offset: Vector2<f32>) -> Point {
    Point::new(center.x + offset.x, center.y + offset.y)
}

/// Half width and vertical offset of every rung, 2.5, 5 and 10 degree rungs
fn rungs() -> impl Iterator<Item = (f32, f32)> {
    let (quarter, step) = (QUARTER_RUNG, LADDER_SPACING);
    let half = (-2..4).map(move |i| (quarter, -(i as f32) * step - step / 2.0));
    let five = (-1..5).map(move |i| (quarter * 2.0, -(i as f32) * step));
    let ten = (-1..3).map(move |i| (quarter * 4.0, -(i as f32) * 2.0 * step));
    let bottom = [(quarter * 2.5, 2.75 * step), (quarter * 4.0, 3.5 * step)];
    half.chain(five).chain(ten).chain(bottom.into_iter())
}

const LADDER_LABELS: [(&str, f32); 4] = [("10", 2.0), ("10", -2.0), ("20", -4.0), ("20", 3.5)];

pub fn layout(roll: f32, radio_altitude: Option<f32>, spec: &RollScaleSpec) -> Attitude {
    let rotation = -roll * PI / 180.0;
    let horizon = Rotation2::new(rotation);
    let left = to_point(&spec.center, horizon * Vector2::new(-spec.radius, 0.0));
    let right = to_point(&spec.center, horizon * Vector2::new(spec.radius, 0.0));
    let pointer = horizon * Vector2::new(0.0, -spec.radius + POINTER_OFFSET);

    let mut marks = Vec::new();
    for &(angle, kind, height) in ROLL_MARKS.iter() {
        let rotation = Rotation2::new(angle * PI / 180.0);
        let inner = to_point(&spec.center, rotation * Vector2::new(0.0, -spec.radius));
        let outer = to_point(&spec.center, rotation * Vector2::new(0.0, -spec.radius - height));
        marks.push(RollMark { angle, kind, inner, outer }).ok();
    }

    let rolled = |x: f32, y: f32| to_point(&spec.center, horizon * Vector2::new(x, y));
    let line = |x1: f32, x2: f32, y: f32| Line { start: rolled(x1, y), end: rolled(x2, y) };
    let mut ladder = Vec::new();
    for (half_width, y) in rungs() {
        ladder.push(line(-half_width, half_width, y)).ok();
    }

    let quarter = QUARTER_RUNG;
    let mut ladder_labels = Vec::new();
    let offset = quarter * 4.0 + LABEL_GAP;
    for &(text, steps) in LADDER_LABELS.iter() {
        let y = steps * LADDER_SPACING;
        let label = PitchLabel { text, left: rolled(-offset, y), right: rolled(offset, y) };
        ladder_labels.push(label).ok();
    }

    let (inner, y) = (quarter * 2.5, 2.75 * LADDER_SPACING);
    let mut wings = Vec::new();
    for &dy in [-WING_GAP, WING_GAP].iter() {
        wings.push(line(-inner - WING_LENGTH, -inner, y + dy)).ok();
        wings.push(line(inner + WING_LENGTH, inner, y + dy)).ok();
    }

    let radio_altitude = radio_altitude.filter(|&ra| ra <= spec.radio_altitude_max).map(|ra| {
        RadioAltitude { text: integer(round(ra)), low: ra < spec.radio_altitude_low }
    });
    Attitude {
        roll,
        rotation,
        horizon: Line { start: left, end: right },
        pointer: to_point(&spec.center, pointer),
        marks,
        ladder,
        ladder_labels,
        wings,
        radio_altitude,
    }
}

mod test {
    #[cfg(test)]
    fn assert_near(actual: crate::types::Point, x: f32, y: f32) {
        assert!((actual.x - x).abs() < 1e-3, "x {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 1e-3, "y {} != {}", actual.y, y);
    }

    #[test]
    fn test_level_attitude() {
        use super::{layout, MarkKind};
        use crate::config::RollScaleSpec;

        let attitude = layout(0.0, None, &RollScaleSpec::default());
        assert_near(attitude.horizon.start, 190.0, 500.0);
        assert_near(attitude.horizon.end, 690.0, 500.0);
        assert_near(attitude.pointer, 440.0, 254.0);
        assert_eq!(attitude.radio_altitude, None);

        assert_eq!(attitude.marks.len(), 8);
        let mark = attitude.marks[0];
        assert_eq!((mark.angle, mark.kind), (45.0, MarkKind::Line));
        let half = core::f32::consts::FRAC_1_SQRT_2;
        assert_near(mark.inner, 440.0 + 250.0 * half, 500.0 - 250.0 * half);
        assert_near(mark.outer, 440.0 + 268.0 * half, 500.0 - 268.0 * half);
        let mark = attitude.marks[4];
        assert_eq!((mark.angle, mark.kind), (-10.0, MarkKind::Box));
        assert!(mark.inner.x < 440.0);
    }

    #[test]
    fn test_pitch_ladder() {
        use super::layout;
        use crate::config::RollScaleSpec;

        let attitude = layout(0.0, None, &RollScaleSpec::default());
        assert_eq!(attitude.ladder.len(), 18);
        assert_near(attitude.ladder[0].start, 425.0, 575.0);
        assert_near(attitude.ladder[0].end, 455.0, 575.0);
        // 10 degrees nose up
        assert_near(attitude.ladder[14].start, 380.0, 400.0);
        assert_near(attitude.ladder[14].end, 500.0, 400.0);
        assert_near(attitude.ladder[17].start, 380.0, 675.0);

        assert_eq!(attitude.ladder_labels.len(), 4);
        let label = attitude.ladder_labels[1];
        assert_eq!(label.text, "10");
        assert_near(label.left, 370.0, 400.0);
        assert_near(label.right, 510.0, 400.0);
        assert_eq!(attitude.ladder_labels[2].text, "20");
        assert_near(attitude.ladder_labels[2].right, 510.0, 300.0);

        assert_eq!(attitude.wings.len(), 4);
        assert_near(attitude.wings[0].start, 382.5, 634.5);
        assert_near(attitude.wings[0].end, 402.5, 634.5);
        assert_near(attitude.wings[3].start, 497.5, 640.5);

        let attitude = layout(90.0, None, &RollScaleSpec::default());
        assert_near(attitude.ladder[0].start, 515.0, 515.0);
        assert_near(attitude.ladder[0].end, 515.0, 485.0);
    }

    #[test]
    fn test_banked_attitude() {
        use super::layout;
        use crate::config::RollScaleSpec;

        let attitude = layout(90.0, None, &RollScaleSpec::default());
        assert_near(attitude.horizon.start, 440.0, 750.0);
        assert_near(attitude.horizon.end, 440.0, 250.0);
        assert_near(attitude.pointer, 194.0, 500.0);
    }

    #[test]
    fn test_radio_altitude() {
        use super::layout;
        use crate::config::RollScaleSpec;

        let spec = RollScaleSpec::default();
        let radio = layout(0.0, Some(2500.0), &spec).radio_altitude.unwrap();
        assert_eq!((radio.text.as_str(), radio.low), ("2500", false));
        let radio = layout(0.0, Some(99.6), &spec).radio_altitude.unwrap();
        assert_eq!((radio.text.as_str(), radio.low), ("100", true));
        assert_eq!(layout(0.0, Some(2500.5), &spec).radio_altitude, None);
    }
}
