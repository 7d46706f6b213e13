use super::{
    altitude::AltitudeTape,
    annunciator::{DataBlock, FMA},
    attitude::Attitude,
    heading::HeadingTape,
    readout::PressureSetting,
    speed::SpeedTape,
    vertical_speed::VerticalSpeed,
};
use crate::{state::PhaseFlags, types::Text};

/// Everything a renderer needs for one tick, instruments without input are absent
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub phase: PhaseFlags,
    pub speed: Option<SpeedTape>,
    pub attitude: Option<Attitude>,
    pub altitude: Option<AltitudeTape>,
    pub vertical_speed: Option<VerticalSpeed>,
    pub heading: Option<HeadingTape>,
    pub pressure: Option<PressureSetting>,
    pub mach: Option<Text>,
    pub fma: FMA,
    pub data: DataBlock,
}

impl core::fmt::Display for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        serde_json_core_fmt::to_fmt(f, self)
    }
}
