pub mod phase;

use crate::{config::PhaseConfig, types::telemetry::TelemetrySnapshot};

pub use phase::PhaseFlags;
use phase::Inputs;

/// Everything kept between ticks of one display
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DisplayState {
    /// ICAO address the phase flags belong to
    pub identity: Option<u32>,
    pub phase: PhaseFlags,
}

/// Normalized values of a single tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reading<'a> {
    pub telemetry: &'a TelemetrySnapshot,
    pub speed: Option<f32>,
    pub heading: Option<f32>,
    /// QNH corrected, ft
    pub altitude: Option<f32>,
    pub autopilot: Option<bool>,
    pub phase: PhaseFlags,
}

pub struct StateUpdater {
    config: PhaseConfig,
    state: DisplayState,
}

impl StateUpdater {
    pub fn new(config: PhaseConfig) -> Self {
        Self { config, state: DisplayState::default() }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn update<'a>(&mut self, telemetry: &'a TelemetrySnapshot, forward: bool) -> Reading<'a> {
        if telemetry.icao != self.state.identity {
            info!("Aircraft changed from {:?} to {:?}", self.state.identity, telemetry.icao);
            self.state = DisplayState { identity: telemetry.icao, phase: PhaseFlags::default() };
        }

        let speed = match telemetry.indicated_airspeed {
            Some(ias) if !telemetry.on_surface() => Some(ias),
            _ => telemetry.groundspeed.or(telemetry.model_speed),
        };
        let heading = telemetry.heading.or(telemetry.track);
        let altitude = match (telemetry.altitude, telemetry.qnh) {
            (Some(altitude), Some(qnh)) => Some(altitude + qnh.correction().raw),
            (altitude, _) => altitude,
        };
        let autopilot = match telemetry.autopilot {
            Some(-1) | None => None,
            Some(engaged) => Some(engaged != 0),
        };

        let inputs = Inputs {
            forward,
            on_surface: telemetry.on_surface(),
            airborne: telemetry.airborne(),
            was_on_surface: telemetry.was_on_surface(),
            was_airborne: telemetry.was_airborne(),
            model_speed: telemetry.model_speed,
            altitude,
            runway_estimate: telemetry.runway_altitude_estimate,
        };
        let phase = &mut self.state.phase;
        if let Some(event) = phase.step_rollout(&inputs, &self.config) {
            debug!("Rollout {} on {:?}", if phase.rollout { "entered" } else { "exited" }, event);
        }
        if let Some(event) = phase.step_takeoff(&inputs, &self.config) {
            debug!("Takeoff {} on {:?}", if phase.takeoff { "entered" } else { "exited" }, event);
        }

        let reading = Reading { telemetry, speed, heading, altitude, autopilot, phase: *phase };
        trace!(
            "speed {:?} heading {:?} altitude {:?} phase {:?}",
            speed,
            heading,
            altitude,
            reading.phase
        );
        reading
    }
}

mod test {
    #[cfg(test)]
    use crate::types::telemetry::TelemetrySnapshot;

    #[cfg(test)]
    fn ground(model_speed: f32) -> TelemetrySnapshot {
        TelemetrySnapshot {
            icao: Some(0x4CA123),
            on_surface: Some(true),
            model_speed: Some(model_speed),
            ..Default::default()
        }
    }

    #[test]
    fn test_speed_fallback() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(60.0);
        telemetry.indicated_airspeed = Some(150.0);
        telemetry.groundspeed = Some(140.0);
        assert_eq!(updater.update(&telemetry, true).speed, Some(140.0));

        telemetry.groundspeed = None;
        assert_eq!(updater.update(&telemetry, true).speed, Some(60.0));

        telemetry.on_surface = Some(false);
        assert_eq!(updater.update(&telemetry, true).speed, Some(150.0));

        telemetry.indicated_airspeed = None;
        assert_eq!(updater.update(&telemetry, true).speed, Some(60.0));
    }

    #[test]
    fn test_heading_fallback() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = TelemetrySnapshot { track: Some(271.0), ..Default::default() };
        assert_eq!(updater.update(&telemetry, true).heading, Some(271.0));
        telemetry.heading = Some(268.0);
        assert_eq!(updater.update(&telemetry, true).heading, Some(268.0));
    }

    #[test]
    fn test_qnh_correction_once() {
        use super::StateUpdater;
        use crate::{config::PhaseConfig, types::measurement::Pressure};

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let telemetry = TelemetrySnapshot {
            altitude: Some(5000.0),
            qnh: Some(Pressure(1003.25)),
            ..Default::default()
        };
        assert_eq!(updater.update(&telemetry, true).altitude, Some(4700.0));
        assert_eq!(updater.update(&telemetry, true).altitude, Some(4700.0));
        assert_eq!(telemetry.altitude, Some(5000.0));

        let telemetry = TelemetrySnapshot { altitude: Some(5000.0), ..Default::default() };
        assert_eq!(updater.update(&telemetry, true).altitude, Some(5000.0));
    }

    #[test]
    fn test_autopilot_normalized() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = TelemetrySnapshot { autopilot: Some(-1), ..Default::default() };
        assert_eq!(updater.update(&telemetry, true).autopilot, None);
        telemetry.autopilot = Some(0);
        assert_eq!(updater.update(&telemetry, true).autopilot, Some(false));
        telemetry.autopilot = Some(1);
        assert_eq!(updater.update(&telemetry, true).autopilot, Some(true));
    }

    #[test]
    fn test_rollout_sequence() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(130.0);
        telemetry.was_on_surface_60s_ago = Some(false);
        let reading = updater.update(&telemetry, true);
        assert!(reading.phase.rollout);
        assert!(!reading.phase.takeoff);

        telemetry.model_speed = Some(45.0);
        assert!(updater.update(&telemetry, true).phase.rollout);

        telemetry.model_speed = Some(39.0);
        assert!(!updater.update(&telemetry, true).phase.rollout);
    }

    #[test]
    fn test_landing_rollout() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = TelemetrySnapshot {
            icao: Some(0x4CA123),
            on_surface: Some(false),
            was_on_surface_60s_ago: Some(false),
            model_speed: Some(140.0),
            ..Default::default()
        };
        assert!(!updater.update(&telemetry, true).phase.rollout);
        assert!(!updater.update(&telemetry, true).phase.rollout);

        telemetry.on_surface = Some(true);
        telemetry.model_speed = Some(75.0);
        let reading = updater.update(&telemetry, true);
        assert!(reading.phase.rollout);
        assert!(!reading.phase.takeoff);

        telemetry.model_speed = Some(35.0);
        assert!(!updater.update(&telemetry, true).phase.rollout);
    }

    #[test]
    fn test_rollout_thresholds() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(69.9);
        telemetry.was_on_surface_60s_ago = Some(false);
        assert!(!updater.update(&telemetry, true).phase.rollout);

        telemetry.model_speed = Some(70.0);
        assert!(updater.update(&telemetry, true).phase.rollout);

        telemetry.model_speed = Some(40.0);
        assert!(updater.update(&telemetry, true).phase.rollout);

        telemetry.model_speed = Some(39.9);
        assert!(!updater.update(&telemetry, true).phase.rollout);
    }

    #[test]
    fn test_rollout_needs_forward_playback() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(130.0);
        telemetry.was_on_surface_60s_ago = Some(false);
        assert!(!updater.update(&telemetry, false).phase.rollout);

        // Lagged flag unknown
        telemetry.was_on_surface_60s_ago = None;
        assert!(!updater.update(&telemetry, true).phase.rollout);
    }

    #[test]
    fn test_rollout_exits_when_airborne() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(130.0);
        telemetry.was_on_surface_60s_ago = Some(false);
        assert!(updater.update(&telemetry, true).phase.rollout);
        telemetry.on_surface = Some(false);
        assert!(!updater.update(&telemetry, true).phase.rollout);
    }

    #[test]
    fn test_takeoff_capture() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(34.0);
        telemetry.altitude = Some(100.0);
        telemetry.was_on_surface_60s_ago = Some(true);
        assert!(!updater.update(&telemetry, true).phase.takeoff);

        telemetry.model_speed = Some(40.0);
        let reading = updater.update(&telemetry, true);
        assert!(reading.phase.takeoff);
        assert_eq!(reading.phase.runway_altitude, Some(100.0));

        // Airborne and climbing, the captured runway altitude is kept
        telemetry.on_surface = Some(false);
        telemetry.model_speed = Some(160.0);
        telemetry.altitude = Some(1000.0);
        let reading = updater.update(&telemetry, true);
        assert!(reading.phase.takeoff);
        assert_eq!(reading.phase.runway_altitude, Some(100.0));

        telemetry.altitude = Some(1600.0);
        let reading = updater.update(&telemetry, true);
        assert!(!reading.phase.takeoff);
        assert_eq!(reading.phase.runway_altitude, Some(100.0));
    }

    #[test]
    fn test_takeoff_roll() {
        use super::StateUpdater;
        use crate::{config::PhaseConfig, types::measurement::Pressure};

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(20.0);
        telemetry.altitude = Some(350.0);
        telemetry.qnh = Some(Pressure(1003.25));
        let reading = updater.update(&telemetry, true);
        assert!(!reading.phase.takeoff);
        assert_eq!(reading.phase.runway_altitude, None);

        telemetry.model_speed = Some(36.0);
        let reading = updater.update(&telemetry, true);
        assert!(reading.phase.takeoff);
        assert_eq!(reading.phase.runway_altitude, Some(50.0));
    }

    #[test]
    fn test_takeoff_thresholds() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(34.9);
        telemetry.altitude = Some(100.0);
        assert!(!updater.update(&telemetry, true).phase.takeoff);

        telemetry.model_speed = Some(35.0);
        assert!(updater.update(&telemetry, true).phase.takeoff);

        telemetry.model_speed = Some(20.1);
        assert!(updater.update(&telemetry, true).phase.takeoff);

        telemetry.model_speed = Some(20.0);
        assert!(!updater.update(&telemetry, true).phase.takeoff);
    }

    #[test]
    fn test_takeoff_rejected() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(50.0);
        telemetry.altitude = Some(100.0);
        assert!(updater.update(&telemetry, true).phase.takeoff);

        telemetry.model_speed = Some(20.0);
        assert!(!updater.update(&telemetry, true).phase.takeoff);
    }

    #[test]
    fn test_takeoff_from_estimate() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let telemetry = TelemetrySnapshot {
            icao: Some(0x4CA123),
            on_surface: Some(false),
            was_on_surface_60s_ago: Some(true),
            model_speed: Some(160.0),
            altitude: Some(900.0),
            runway_altitude_estimate: Some(80.0),
            ..Default::default()
        };
        let reading = updater.update(&telemetry, true);
        assert!(reading.phase.takeoff);
        assert_eq!(reading.phase.runway_altitude, Some(80.0));
    }

    #[test]
    fn test_takeoff_adopts_late_estimate() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(50.0);
        let reading = updater.update(&telemetry, true);
        assert!(reading.phase.takeoff);
        assert_eq!(reading.phase.runway_altitude, None);

        telemetry.runway_altitude_estimate = Some(42.0);
        assert_eq!(updater.update(&telemetry, true).phase.runway_altitude, Some(42.0));
    }

    #[test]
    fn test_identity_reset() {
        use super::StateUpdater;
        use crate::config::PhaseConfig;

        let mut updater = StateUpdater::new(PhaseConfig::default());
        let mut telemetry = ground(50.0);
        telemetry.altitude = Some(100.0);
        assert!(updater.update(&telemetry, true).phase.takeoff);
        assert_eq!(updater.state().identity, Some(0x4CA123));

        telemetry.icao = Some(0x4CA124);
        telemetry.on_surface = Some(false);
        let reading = updater.update(&telemetry, true);
        assert!(!reading.phase.takeoff);
        assert!(!reading.phase.rollout);
        assert_eq!(reading.phase.runway_altitude, None);
        assert_eq!(updater.state().identity, Some(0x4CA124));
    }
}
