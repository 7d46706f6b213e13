use crate::{
    config::TapeSpec,
    tape::{self, layout_target, TapeLayout, Target},
    types::{padded, round},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeadingTape {
    pub heading: f32,
    pub tape: TapeLayout,
    /// Pixel of the track diamond, absent when off the tape
    pub track: Option<f32>,
    pub target: Option<Target>,
}

/// Shortest signed angle from `from` to `to`, within (-180, 180]
pub fn difference(from: f32, to: f32) -> f32 {
    let diff = (to - from) % 360.0;
    if diff > 180.0 {
        diff - 360.0
    } else if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

pub fn layout(
    heading: f32,
    track: Option<f32>,
    selected: Option<f32>,
    spec: &TapeSpec,
) -> HeadingTape {
    let track = track
        .map(|t| spec.position(heading, heading + difference(heading, t)))
        .filter(|&position| spec.start() <= position && position <= spec.end());
    let unwrapped = selected.map(|s| heading + difference(heading, s));
    let target = layout_target(heading, unwrapped, spec, |_| {
        selected.map(|s| padded(round(s), 3)).unwrap_or_default()
    });
    HeadingTape { heading, tape: tape::layout(heading, spec), track, target }
}

mod test {
    #[test]
    fn test_difference() {
        use super::difference;

        assert_eq!(difference(350.0, 10.0), 20.0);
        assert_eq!(difference(10.0, 350.0), -20.0);
        assert_eq!(difference(0.0, 180.0), 180.0);
        assert_eq!(difference(180.0, 0.0), 180.0);
        assert_eq!(difference(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_track_clipped_to_tape() {
        use super::layout;
        use crate::config::TapeSpec;

        let spec = TapeSpec::heading();
        assert_eq!(layout(0.0, Some(22.5), None, &spec).track, Some(675.0));
        assert_eq!(layout(0.0, Some(337.5), None, &spec).track, Some(225.0));
        assert_eq!(layout(0.0, Some(90.0), None, &spec).track, None);
        assert_eq!(layout(350.0, Some(320.0), None, &spec).track, None);
    }

    #[test]
    fn test_heading_target_wrap() {
        use super::layout;
        use crate::{config::TapeSpec, tape::TargetMode};

        let spec = TapeSpec::heading();
        let heading = layout(355.0, Some(5.0), Some(10.0), &spec);
        assert_eq!(heading.track, Some(550.0));
        let target = heading.target.unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 600.0));
        assert_eq!(target.text.as_str(), "010");

        let heading = layout(5.0, None, Some(340.0), &spec);
        let target = heading.target.unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelStart, 225.0));
        assert_eq!(target.text.as_str(), "340");

        let heading = layout(5.0, None, Some(90.0), &spec);
        let target = heading.target.unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelEnd, 675.0));
        assert_eq!(heading.track, None);
    }
}
