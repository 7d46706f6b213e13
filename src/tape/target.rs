use crate::{config::TapeSpec, types::Text};

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetMode {
    /// Drawn on the tape
    Marker,
    /// Beyond the start edge, above a vertical tape or left of a horizontal one
    LabelStart,
    LabelEnd,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Target {
    pub mode: TargetMode,
    /// Pixel on the tape, or the edge a label is attached to
    pub position: f32,
    pub text: Text,
}

/// Places a selected value against the tape. `text` decides the label or
/// marker text once the mode is known.
pub fn layout_target<F>(
    current: f32,
    target: Option<f32>,
    spec: &TapeSpec,
    text: F,
) -> Option<Target>
where
    F: FnOnce(TargetMode) -> Text,
{
    let position = spec.position(current, target?);
    let (mode, position) = if position < spec.start() {
        (TargetMode::LabelStart, spec.start())
    } else if position > spec.end() {
        (TargetMode::LabelEnd, spec.end())
    } else {
        (TargetMode::Marker, position)
    };
    Some(Target { mode, position, text: text(mode) })
}

mod test {
    #[cfg(test)]
    fn spec() -> crate::config::TapeSpec {
        use crate::config::TapeSpec;

        TapeSpec { origin: 0.0, length: 250.0, pixels_per_unit: 2.0, ..TapeSpec::speed() }
    }

    #[test]
    fn test_target_edges() {
        use super::{layout_target, TargetMode};
        use crate::types::Text;

        let spec = spec();
        let text = |_| Text::from("T");
        let target = layout_target(100.0, Some(162.5), &spec, text).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 0.0));
        let target = layout_target(100.0, Some(163.0), &spec, text).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelStart, 0.0));
        let target = layout_target(100.0, Some(37.5), &spec, text).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 250.0));
        let target = layout_target(100.0, Some(37.0), &spec, text).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelEnd, 250.0));
        let target = layout_target(100.0, Some(110.0), &spec, text).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 105.0));
        assert_eq!(target.text.as_str(), "T");
    }

    #[test]
    fn test_absent_target() {
        use super::layout_target;
        use crate::{config::TapeSpec, types::Text};

        assert_eq!(layout_target(100.0, None, &TapeSpec::speed(), |_| Text::new()), None);
    }

    #[test]
    fn test_horizontal_target() {
        use super::{layout_target, TargetMode};
        use crate::{config::TapeSpec, types::Text};

        let spec = TapeSpec::heading();
        let target = layout_target(90.0, Some(67.5), &spec, |_| Text::new()).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 225.0));
        let target = layout_target(90.0, Some(67.0), &spec, |_| Text::new()).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelStart, 225.0));
        let target = layout_target(90.0, Some(113.0), &spec, |_| Text::new()).unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelEnd, 675.0));
    }
}
