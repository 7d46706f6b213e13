pub mod altitude;
pub mod annunciator;
pub mod attitude;
pub mod heading;
pub mod out;
pub mod readout;
pub mod speed;
pub mod vertical_speed;

use crate::{
    config::Config,
    state::{DisplayState, StateUpdater},
    types::telemetry::TelemetrySnapshot,
};

pub use out::Frame;

/// Primary flight display of one aircraft
pub struct PFD {
    config: Config,
    updater: StateUpdater,
}

impl PFD {
    pub fn new(config: Config) -> Self {
        Self { updater: StateUpdater::new(config.phase), config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &DisplayState {
        self.updater.state()
    }

    /// Runs the state updater then lays out every instrument from the same reading.
    pub fn tick(&mut self, telemetry: &TelemetrySnapshot, forward: bool) -> Frame {
        let reading = self.updater.update(telemetry, forward);
        let config = &self.config;
        let standard = telemetry.qnh.map(|qnh| config.pressure.contains(qnh.0)).unwrap_or(false);
        let vario = telemetry.vertical_speed;
        Frame {
            phase: reading.phase,
            speed: reading
                .speed
                .map(|current| speed::layout(current, telemetry.selected_speed, &config.speed)),
            attitude: telemetry
                .roll
                .map(|roll| attitude::layout(roll, telemetry.radio_altitude, &config.roll)),
            altitude: reading.altitude.map(|current| {
                let selected = telemetry.selected_altitude;
                let (spec, drum) = (&config.altitude, &config.subscale);
                altitude::layout(current, selected, vario, standard, spec, drum)
            }),
            vertical_speed: vario.map(|vs| vertical_speed::layout(vs, &config.vertical_speed)),
            heading: reading.heading.map(|current| {
                let (track, selected) = (telemetry.track, telemetry.selected_heading);
                heading::layout(current, track, selected, &config.heading)
            }),
            pressure: telemetry.qnh.map(|qnh| readout::pressure(qnh, &config.pressure)),
            mach: telemetry.mach.and_then(readout::mach),
            fma: annunciator::fma(&reading),
            data: annunciator::data_block(&reading),
        }
    }
}

mod test {
    #[cfg(test)]
    use crate::types::{measurement::Pressure, telemetry::TelemetrySnapshot};

    #[cfg(test)]
    fn cruise() -> TelemetrySnapshot {
        TelemetrySnapshot {
            icao: Some(0x406A93),
            callsign: Some("BAW256".into()),
            aircraft_type: Some("A320".into()),
            on_surface: Some(false),
            was_on_surface_60s_ago: Some(false),
            model_speed: Some(450.0),
            indicated_airspeed: Some(280.0),
            true_airspeed: Some(451.0),
            groundspeed: Some(470.0),
            selected_speed: Some(290.0),
            mach: Some(0.785),
            altitude: Some(35000.0),
            qnh: Some(Pressure(1013.25)),
            vertical_speed: Some(0.0),
            heading: Some(355.0),
            track: Some(358.0),
            roll: Some(5.0),
            selected_altitude: Some(37000.0),
            selected_heading: Some(10.0),
            autopilot: Some(1),
            vertical_mode: Some(1),
            lateral_mode: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_frame() {
        use serde_json::json;

        use super::PFD;
        use crate::config::Config;

        let expected = json!({
            "phase": {"rollout": false, "takeoff": false, "runway_altitude": null},
            "speed": null,
            "attitude": null,
            "altitude": null,
            "vertical_speed": null,
            "heading": null,
            "pressure": null,
            "mach": null,
            "fma": {
                "thrust": null,
                "vertical": null,
                "lateral": null,
                "landing": false,
                "capability": null,
                "approach": null,
                "autopilot": null,
                "flight_director": "1 FD 2",
                "autothrust": false
            },
            "data": {
                "callsign": null,
                "aircraft_type": null,
                "tcas": null,
                "groundspeed": null,
                "true_airspeed": null,
                "wind": null,
                "temperature": null
            }
        });
        let mut pfd = PFD::new(Config::default());
        let frame = pfd.tick(&TelemetrySnapshot::default(), true);
        let string = format!("{}", frame);
        assert_eq!(expected, serde_json::from_str::<serde_json::Value>(&string).unwrap());
    }

    #[test]
    fn test_cruise_frame() {
        use super::PFD;
        use crate::{config::Config, tape::TargetMode};

        let mut pfd = PFD::new(Config::default());
        let frame = pfd.tick(&cruise(), true);

        let speed = frame.speed.as_ref().unwrap();
        assert_eq!(speed.speed, 280.0);
        let target = speed.target.as_ref().unwrap();
        assert_eq!((target.mode, target.position), (TargetMode::Marker, 440.0));
        assert_eq!(target.text.as_str(), "290");

        let altitude = frame.altitude.as_ref().unwrap();
        assert_eq!(altitude.altitude, 35000.0);
        assert_eq!(altitude.target.as_ref().unwrap().mode, TargetMode::LabelStart);
        assert_eq!(altitude.target.as_ref().unwrap().text.as_str(), "370");
        assert!(altitude.flight_level);
        assert_eq!(altitude.readout.as_str(), "350");

        let heading = frame.heading.as_ref().unwrap();
        assert_eq!(heading.track, Some(480.0));
        assert_eq!(heading.target.as_ref().unwrap().position, 600.0);
        assert_eq!(heading.target.as_ref().unwrap().text.as_str(), "010");

        assert_eq!(frame.vertical_speed.as_ref().unwrap().line_end, 500.0);
        assert!(frame.attitude.is_some());
        assert_eq!(frame.mach.as_ref().map(|m| m.as_str()), Some(".785"));
        assert_eq!(frame.fma.thrust, Some("SPEED"));
        assert_eq!(frame.fma.vertical, Some("ALT"));
        assert_eq!(frame.fma.lateral, Some("NAV"));
        assert_eq!(frame.fma.autopilot, Some("AP1"));
        assert!(frame.fma.autothrust);

        let value: serde_json::Value = serde_json::from_str(&frame.to_string()).unwrap();
        assert_eq!(value["pressure"]["text"], "STD");
        assert_eq!(value["pressure"]["standard"], true);
        assert_eq!(value["altitude"]["target"]["mode"], "label-start");
        assert_eq!(value["altitude"]["subscale"][2]["text"], "00");
        assert_eq!(value["data"]["callsign"], "BAW256");
        assert_eq!(value["data"]["groundspeed"], "470");
        assert_eq!(value["speed"]["tape"]["labels"][0]["text"], "320");
        assert_eq!(value["attitude"]["marks"][0]["kind"], "line");
    }

    #[test]
    fn test_qnh_corrected_tapes() {
        use super::PFD;
        use crate::config::Config;

        let mut pfd = PFD::new(Config::default());
        let telemetry = TelemetrySnapshot {
            altitude: Some(3300.0),
            qnh: Some(Pressure(1003.25)),
            selected_altitude: Some(3000.0),
            ..cruise()
        };
        let frame = pfd.tick(&telemetry, true);
        let altitude = frame.altitude.unwrap();
        assert_eq!(altitude.altitude, 3000.0);
        let target = altitude.target.unwrap();
        assert_eq!((target.position, target.text.as_str()), (500.0, "3000"));
        assert!(!altitude.flight_level);
        assert_eq!(frame.pressure.unwrap().text.as_str(), "QNH 1003");
    }

    #[test]
    fn test_takeoff_run() {
        use super::PFD;
        use crate::config::Config;

        let mut pfd = PFD::new(Config::default());
        let mut telemetry = TelemetrySnapshot {
            icao: Some(0x406A93),
            on_surface: Some(true),
            was_on_surface_60s_ago: Some(true),
            model_speed: Some(10.0),
            groundspeed: Some(10.0),
            indicated_airspeed: Some(45.0),
            altitude: Some(250.0),
            ..Default::default()
        };
        let frame = pfd.tick(&telemetry, true);
        assert_eq!(frame.speed.unwrap().speed, 10.0);
        assert_eq!(frame.fma.thrust, None);

        telemetry.model_speed = Some(80.0);
        telemetry.groundspeed = Some(80.0);
        let frame = pfd.tick(&telemetry, true);
        assert!(frame.phase.takeoff);
        assert_eq!(frame.phase.runway_altitude, Some(250.0));
        assert_eq!(frame.fma.thrust, Some("TOGA"));

        telemetry.on_surface = Some(false);
        telemetry.model_speed = Some(170.0);
        telemetry.indicated_airspeed = Some(165.0);
        telemetry.altitude = Some(1700.0);
        let frame = pfd.tick(&telemetry, true);
        assert!(frame.phase.takeoff);
        assert_eq!(frame.speed.unwrap().speed, 165.0);

        telemetry.altitude = Some(1750.0);
        assert!(!pfd.tick(&telemetry, true).phase.takeoff);
        assert_eq!(pfd.state().phase.runway_altitude, Some(250.0));
    }

    #[test]
    fn test_independent_displays() {
        use super::PFD;
        use crate::config::Config;

        let mut first = PFD::new(Config::default());
        let mut second = PFD::new(Config::default());
        let telemetry = TelemetrySnapshot {
            on_surface: Some(true),
            model_speed: Some(50.0),
            ..Default::default()
        };
        assert!(first.tick(&telemetry, true).phase.takeoff);
        assert!(!second.tick(&TelemetrySnapshot::default(), true).phase.takeoff);
        assert!(first.state().phase.takeoff);
    }
}
