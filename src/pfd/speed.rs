use crate::{
    config::TapeSpec,
    tape::{self, layout_target, TapeLayout, Target},
    types::{integer, round},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeedTape {
    pub speed: f32,
    pub tape: TapeLayout,
    pub target: Option<Target>,
}

pub fn layout(speed: f32, selected: Option<f32>, spec: &TapeSpec) -> SpeedTape {
    let target = layout_target(speed, selected, spec, |_| {
        selected.map(|s| integer(round(s))).unwrap_or_default()
    });
    SpeedTape { speed, tape: tape::layout(speed, spec), target }
}

mod test {
    #[test]
    fn test_speed_target() {
        use super::layout;
        use crate::{config::TapeSpec, tape::TargetMode};

        let spec = TapeSpec::speed();
        let speed = layout(250.0, Some(260.0), &spec);
        let target = speed.target.unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 440.0));
        assert_eq!(target.text.as_str(), "260");

        let speed = layout(150.0, Some(250.4), &spec);
        let target = speed.target.unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::LabelStart, 250.0));
        assert_eq!(target.text.as_str(), "250");

        let speed = layout(150.0, Some(100.0), &spec);
        assert_eq!(speed.target.unwrap().mode, TargetMode::LabelEnd);

        assert_eq!(layout(150.0, None, &spec).target, None);
    }
}
