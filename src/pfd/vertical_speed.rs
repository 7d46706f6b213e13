use heapless::Vec;
#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

use crate::{
    config::VerticalSpeedSpec,
    types::{
        measurement::{
            unit::{FTmin, HFTmin},
            Velocity,
        },
        padded, round, Text,
    },
};

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Mark {
    pub position: f32,
    pub major: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ScaleLabel {
    pub position: f32,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerticalSpeed {
    /// Needle end, the needle starts at the scale center
    pub line_end: f32,
    pub saturated: bool,
    /// Hundreds of ft/min
    pub text: Option<Text>,
    pub text_above: bool,
    pub marks: Vec<Mark, 13>,
    pub labels: Vec<ScaleLabel, 6>,
}

/// Needle deflection in multiples of spacing:
/// 1000 ft/min at 4, 2000 at 6, 6000 and beyond at 8
fn offset(rate: f32, spacing: f32) -> (f32, bool) {
    if rate <= 1000.0 {
        (rate * 4.0 * spacing / 1000.0, false)
    } else if rate < 2000.0 {
        ((rate - 1000.0) * 2.0 * spacing / 1000.0 + 4.0 * spacing, false)
    } else if rate < 6000.0 {
        ((rate - 2000.0) * 2.0 * spacing / 4000.0 + 6.0 * spacing, false)
    } else {
        (8.0 * spacing, true)
    }
}

fn scale(spec: &VerticalSpeedSpec) -> (Vec<Mark, 13>, Vec<ScaleLabel, 6>) {
    let center = spec.center();
    let mut marks = Vec::new();
    for i in -8i32..=8 {
        let step = i.abs();
        if step == 1 || step == 3 {
            continue;
        }
        let position = center - i as f32 * spec.spacing;
        marks.push(Mark { position, major: step == 4 || step == 6 || step == 8 }).ok();
    }
    let mut labels = Vec::new();
    for &(step, text) in [(-8, "6"), (-6, "2"), (-4, "1"), (4, "1"), (6, "2"), (8, "6")].iter() {
        let position = center + step as f32 * spec.spacing;
        labels.push(ScaleLabel { position, text }).ok();
    }
    (marks, labels)
}

pub fn layout(vertical_speed: f32, spec: &VerticalSpeedSpec) -> VerticalSpeed {
    let rate = vertical_speed.abs();
    let (deflection, saturated) = offset(rate, spec.spacing);
    let line_end = if vertical_speed > 0.0 {
        spec.center() - deflection
    } else if vertical_speed < 0.0 {
        spec.center() + deflection
    } else {
        spec.center()
    };
    let text = if rate > spec.text_threshold {
        Some(padded(round(Velocity::new(rate, FTmin).u(HFTmin).raw), 2))
    } else {
        None
    };
    let (marks, labels) = scale(spec);
    VerticalSpeed { line_end, saturated, text, text_above: vertical_speed > 0.0, marks, labels }
}

mod test {
    #[test]
    fn test_vertical_speed_needle() {
        use super::layout;
        use crate::config::VerticalSpeedSpec;

        let spec = VerticalSpeedSpec::default();
        let vs = layout(1500.0, &spec);
        assert_eq!(vs.line_end, 325.0);
        assert_eq!(vs.text.as_ref().map(|t| t.as_str()), Some("15"));
        assert!(vs.text_above);
        assert!(!vs.saturated);

        let vs = layout(-500.0, &spec);
        assert_eq!(vs.line_end, 570.0);
        assert_eq!(vs.text.as_ref().map(|t| t.as_str()), Some("05"));
        assert!(!vs.text_above);

        let vs = layout(4000.0, &spec);
        assert_eq!(vs.line_end, 255.0);

        let vs = layout(150.0, &spec);
        assert_eq!(vs.line_end, 479.0);
        assert_eq!(vs.text, None);

        assert_eq!(layout(0.0, &spec).line_end, 500.0);
    }

    #[test]
    fn test_vertical_speed_saturation() {
        use super::layout;
        use crate::config::VerticalSpeedSpec;

        let spec = VerticalSpeedSpec::default();
        let vs = layout(-7000.0, &spec);
        assert!(vs.saturated);
        assert_eq!(vs.line_end, 780.0);
        assert_eq!(vs.text.as_ref().map(|t| t.as_str()), Some("70"));

        let vs = layout(6000.0, &spec);
        assert!(vs.saturated);
        assert_eq!(vs.line_end, 220.0);

        assert!(!layout(5999.0, &spec).saturated);
    }

    #[test]
    fn test_vertical_speed_scale() {
        use super::layout;
        use crate::config::VerticalSpeedSpec;

        let vs = layout(0.0, &VerticalSpeedSpec::default());
        let marks: std::vec::Vec<(f32, bool)> =
            vs.marks.iter().map(|m| (m.position, m.major)).collect();
        assert_eq!(marks.len(), 13);
        assert_eq!(marks[0], (780.0, true));
        assert_eq!(marks[1], (745.0, false));
        assert_eq!(marks[6], (500.0, false));
        assert_eq!(marks[12], (220.0, true));
        assert!(!marks.iter().any(|&(p, _)| p == 465.0 || p == 395.0));

        let labels: std::vec::Vec<(f32, &str)> =
            vs.labels.iter().map(|l| (l.position, l.text)).collect();
        assert_eq!(labels[0], (220.0, "6"));
        assert_eq!(labels[2], (360.0, "1"));
        assert_eq!(labels[5], (780.0, "6"));
    }
}
