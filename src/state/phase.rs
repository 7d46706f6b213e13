use crate::config::PhaseConfig;

/// Per tick inputs of the phase machines, absent values fail every comparison
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Inputs {
    pub forward: bool,
    pub on_surface: bool,
    pub airborne: bool,
    pub was_on_surface: bool,
    pub was_airborne: bool,
    pub model_speed: Option<f32>,
    /// QNH corrected
    pub altitude: Option<f32>,
    pub runway_estimate: Option<f32>,
}

fn at_least(value: Option<f32>, threshold: f32) -> bool {
    value.map(|v| v >= threshold).unwrap_or(false)
}

fn below(value: Option<f32>, threshold: f32) -> bool {
    value.map(|v| v < threshold).unwrap_or(false)
}

impl Inputs {
    fn touchdown(&self, config: &PhaseConfig) -> bool {
        self.forward
            && self.was_airborne
            && self.on_surface
            && at_least(self.model_speed, config.rollout_entry)
    }

    fn slowed(&self, config: &PhaseConfig) -> bool {
        below(self.model_speed, config.rollout_exit)
    }

    fn takeoff_roll(&self, config: &PhaseConfig) -> bool {
        self.forward && self.on_surface && at_least(self.model_speed, config.takeoff_entry)
    }

    fn recently_departed(&self, config: &PhaseConfig, runway: Option<f32>) -> bool {
        at_least(self.model_speed, config.takeoff_entry)
            && runway.is_none()
            && self.was_on_surface
            && self.runway_estimate.is_some()
    }

    fn below_acceleration_height(&self, config: &PhaseConfig, runway: Option<f32>) -> bool {
        match (self.altitude, runway) {
            (Some(altitude), Some(runway)) => altitude < runway + config.acceleration_height,
            _ => false,
        }
    }

    fn above_acceleration_height(&self, config: &PhaseConfig, runway: Option<f32>) -> bool {
        match (self.altitude, runway) {
            (Some(altitude), Some(runway)) => altitude >= runway + config.acceleration_height,
            _ => false,
        }
    }

    fn stopped(&self, config: &PhaseConfig) -> bool {
        self.model_speed.map(|v| v <= config.takeoff_exit).unwrap_or(false)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Rollout {
    Touchdown,
    Slowed,
    Airborne,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Takeoff {
    /// Accelerating on the runway, runway altitude captured
    Roll,
    /// Joined shortly after lift-off, runway altitude estimated externally
    Departed,
    /// Playback running backwards towards the runway
    Reverse,
    Stopped,
    AccelerationHeight,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct PhaseFlags {
    pub rollout: bool,
    pub takeoff: bool,
    /// ft, kept after takeoff ends
    pub runway_altitude: Option<f32>,
}

impl PhaseFlags {
    pub fn step_rollout(&mut self, inputs: &Inputs, config: &PhaseConfig) -> Option<Rollout> {
        if !self.rollout {
            if inputs.touchdown(config) {
                self.rollout = true;
                return Some(Rollout::Touchdown);
            }
            return None;
        }
        if inputs.slowed(config) {
            self.rollout = false;
            Some(Rollout::Slowed)
        } else if inputs.airborne {
            self.rollout = false;
            Some(Rollout::Airborne)
        } else {
            None
        }
    }

    /// Entries and exits form one chain, at most one of them fires per tick.
    pub fn step_takeoff(&mut self, inputs: &Inputs, config: &PhaseConfig) -> Option<Takeoff> {
        let event = if !self.takeoff {
            self.enter_takeoff(inputs, config)
        } else if inputs.stopped(config) {
            self.takeoff = false;
            Some(Takeoff::Stopped)
        } else if inputs.above_acceleration_height(config, self.runway_altitude) {
            self.takeoff = false;
            Some(Takeoff::AccelerationHeight)
        } else {
            None
        };
        if self.takeoff && self.runway_altitude.is_none() {
            self.runway_altitude = inputs.runway_estimate;
        }
        event
    }

    fn enter_takeoff(&mut self, inputs: &Inputs, config: &PhaseConfig) -> Option<Takeoff> {
        if self.rollout {
            return None;
        }
        if inputs.takeoff_roll(config) {
            self.takeoff = true;
            self.runway_altitude = inputs.altitude;
            Some(Takeoff::Roll)
        } else if inputs.recently_departed(config, self.runway_altitude) {
            self.takeoff = true;
            self.runway_altitude = inputs.runway_estimate;
            Some(Takeoff::Departed)
        } else if inputs.airborne
            && inputs.was_on_surface
            && inputs.below_acceleration_height(config, self.runway_altitude)
        {
            self.takeoff = true;
            Some(Takeoff::Reverse)
        } else {
            None
        }
    }
}

mod test {
    #[test]
    fn test_acceleration_height_asymmetry() {
        use super::{Inputs, PhaseFlags, Takeoff};
        use crate::config::PhaseConfig;

        let config = PhaseConfig::default();
        let inputs = Inputs {
            airborne: true,
            was_on_surface: true,
            model_speed: Some(150.0),
            altitude: Some(1500.0),
            ..Default::default()
        };

        // Exactly at runway + 1500 neither enters nor stays
        let mut flags = PhaseFlags { runway_altitude: Some(0.0), ..Default::default() };
        assert_eq!(flags.step_takeoff(&inputs, &config), None);
        assert!(!flags.takeoff);

        let mut flags = PhaseFlags { takeoff: true, runway_altitude: Some(0.0), ..Default::default() };
        assert_eq!(flags.step_takeoff(&inputs, &config), Some(Takeoff::AccelerationHeight));
        assert!(!flags.takeoff);
        assert_eq!(flags.runway_altitude, Some(0.0));

        let inputs = Inputs { altitude: Some(1499.0), ..inputs };
        let mut flags = PhaseFlags { runway_altitude: Some(0.0), ..Default::default() };
        assert_eq!(flags.step_takeoff(&inputs, &config), Some(Takeoff::Reverse));
        assert!(flags.takeoff);
    }

    #[test]
    fn test_rollout_blocks_takeoff() {
        use super::{Inputs, PhaseFlags};
        use crate::config::PhaseConfig;

        let config = PhaseConfig::default();
        let inputs = Inputs {
            forward: true,
            on_surface: true,
            was_on_surface: true,
            model_speed: Some(60.0),
            altitude: Some(100.0),
            ..Default::default()
        };
        let mut flags = PhaseFlags { rollout: true, ..Default::default() };
        assert_eq!(flags.step_rollout(&inputs, &config), None);
        assert_eq!(flags.step_takeoff(&inputs, &config), None);
        assert!(!flags.takeoff);
    }

    #[test]
    fn test_absent_speed_keeps_phase() {
        use super::{Inputs, PhaseFlags};
        use crate::config::PhaseConfig;

        let config = PhaseConfig::default();
        let inputs = Inputs { forward: true, on_surface: true, ..Default::default() };
        let mut flags = PhaseFlags { rollout: true, takeoff: false, runway_altitude: None };
        assert_eq!(flags.step_rollout(&inputs, &config), None);
        assert!(flags.rollout);

        let mut flags = PhaseFlags { takeoff: true, ..Default::default() };
        assert_eq!(flags.step_takeoff(&inputs, &config), None);
        assert!(flags.takeoff);
    }
}
