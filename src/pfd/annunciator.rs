use core::fmt::Write;

use crate::{
    state::Reading,
    types::{
        padded, round,
        telemetry::{LateralMode, TcasMode, VerticalMode},
        Name, Text,
    },
};

/// Radio altitude below which approach mode reads FLARE, ft
const FLARE_HEIGHT: f32 = 40.0;
const LAND_HEIGHT: f32 = 400.0;

/// Flight mode annunciator, left to right
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct FMA {
    pub thrust: Option<&'static str>,
    pub vertical: Option<&'static str>,
    pub lateral: Option<&'static str>,
    /// Final approach, the vertical mode spans the lateral column
    pub landing: bool,
    pub capability: Option<&'static str>,
    pub approach: Option<&'static str>,
    pub autopilot: Option<&'static str>,
    pub flight_director: &'static str,
    pub autothrust: bool,
}

fn trend(difference: f32) -> &'static str {
    if difference > 0.0 {
        "CLB"
    } else if difference < 0.0 {
        "DES"
    } else {
        "ALT"
    }
}

fn below(value: Option<f32>, threshold: f32) -> bool {
    value.map(|v| v < threshold).unwrap_or(false)
}

pub fn fma(reading: &Reading) -> FMA {
    let telemetry = reading.telemetry;
    let mut fma = FMA { flight_director: "1 FD 2", ..Default::default() };

    fma.thrust = match (telemetry.selected_speed, reading.phase.takeoff) {
        (Some(_), _) => Some("SPEED"),
        (None, true) => Some("TOGA"),
        (None, false) => None,
    };

    let radio_altitude = telemetry.radio_altitude;
    let airborne = telemetry.airborne();
    let vertical_mode = telemetry.vertical_mode();
    let (vertical, landing) = match vertical_mode {
        Some(VerticalMode::Changing) => match telemetry.vertical_speed {
            Some(vs) => (Some(trend(vs)), false),
            None => match (telemetry.selected_altitude, reading.altitude) {
                (Some(selected), Some(current)) => (Some(trend(selected - current)), false),
                _ => (None, false),
            },
        },
        Some(VerticalMode::Hold) => (Some("ALT"), false),
        Some(VerticalMode::Approach) => {
            if reading.phase.rollout {
                (Some("ROLL OUT"), true)
            } else if airborne && below(radio_altitude, FLARE_HEIGHT) {
                (Some("FLARE"), true)
            } else if airborne && below(radio_altitude, LAND_HEIGHT) {
                (Some("LAND"), true)
            } else {
                (Some("G/S"), false)
            }
        }
        _ => (None, false),
    };
    fma.vertical = vertical;
    fma.landing = landing;

    fma.lateral = match telemetry.lateral_mode() {
        Some(LateralMode::Navigation) => Some("NAV"),
        Some(LateralMode::Localizer) if !fma.landing => Some("LOC"),
        _ => None,
    };

    let autopilot = reading.autopilot == Some(true);
    if autopilot {
        if vertical_mode == Some(VerticalMode::Approach) {
            fma.autopilot = Some("AP1+2");
            fma.capability = Some("CAT3");
            fma.approach = Some("DUAL");
        } else {
            fma.autopilot = Some("AP1");
        }
    }
    fma.autothrust = (telemetry.selected_speed.is_some() || autopilot) && !reading.phase.rollout;
    fma
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Wind {
    /// Direction/speed, e.g. 270/15
    pub text: Text,
    /// Degrees relative to the heading
    pub arrow: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DataBlock {
    pub callsign: Option<Name>,
    pub aircraft_type: Option<Name>,
    pub tcas: Option<&'static str>,
    pub groundspeed: Option<Text>,
    pub true_airspeed: Option<Text>,
    pub wind: Option<Wind>,
    /// Static air temperature, °C
    pub temperature: Option<Text>,
}

fn rounded(value: f32) -> Text {
    let mut text = Text::new();
    write!(text, "{}", round(value)).ok();
    text
}

pub fn data_block(reading: &Reading) -> DataBlock {
    let telemetry = reading.telemetry;
    let tcas = match telemetry.tcas_mode() {
        Some(TcasMode::Standby) => Some("TCAS STBY"),
        Some(TcasMode::TrafficAdvisoryOnly) => Some("TA ONLY"),
        _ => None,
    };
    let wind = match (telemetry.wind_direction, telemetry.wind_speed) {
        (Some(direction), Some(speed)) => {
            let mut text = padded(round(direction), 3);
            write!(text, "/{}", round(speed)).ok();
            Some(Wind { text, arrow: reading.heading.map(|heading| direction - heading) })
        }
        _ => None,
    };
    let temperature = telemetry.static_air_temperature.map(|sat| {
        let mut text = Text::new();
        if sat > 0.0 {
            text.push('+').ok();
        }
        write!(text, "{}", round(sat)).ok();
        text
    });
    DataBlock {
        callsign: telemetry.callsign.clone(),
        aircraft_type: telemetry.aircraft_type.clone(),
        tcas,
        groundspeed: telemetry.groundspeed.map(rounded),
        true_airspeed: telemetry.true_airspeed.map(rounded),
        wind,
        temperature,
    }
}

mod test {
    #[cfg(test)]
    use crate::{state::Reading, types::telemetry::TelemetrySnapshot};

    #[cfg(test)]
    fn reading(telemetry: &TelemetrySnapshot) -> Reading {
        use crate::state::PhaseFlags;

        Reading {
            telemetry,
            speed: telemetry.indicated_airspeed,
            heading: telemetry.heading,
            altitude: telemetry.altitude,
            autopilot: telemetry.autopilot.map(|ap| ap > 0),
            phase: PhaseFlags::default(),
        }
    }

    #[test]
    fn test_fma_landing_sequence() {
        use super::fma;

        let mut telemetry = TelemetrySnapshot {
            on_surface: Some(false),
            vertical_mode: Some(3),
            lateral_mode: Some(2),
            radio_altitude: Some(1200.0),
            autopilot: Some(1),
            ..Default::default()
        };
        let modes = fma(&reading(&telemetry));
        assert_eq!(modes.vertical, Some("G/S"));
        assert_eq!(modes.lateral, Some("LOC"));
        assert!(!modes.landing);
        assert_eq!(modes.autopilot, Some("AP1+2"));
        assert_eq!((modes.capability, modes.approach), (Some("CAT3"), Some("DUAL")));
        assert!(modes.autothrust);

        telemetry.radio_altitude = Some(350.0);
        let modes = fma(&reading(&telemetry));
        assert_eq!(modes.vertical, Some("LAND"));
        assert_eq!(modes.lateral, None);
        assert!(modes.landing);

        telemetry.radio_altitude = Some(30.0);
        assert_eq!(fma(&reading(&telemetry)).vertical, Some("FLARE"));

        telemetry.on_surface = Some(true);
        let mut on_ground = reading(&telemetry);
        on_ground.phase.rollout = true;
        let modes = fma(&on_ground);
        assert_eq!(modes.vertical, Some("ROLL OUT"));
        assert!(!modes.autothrust);
        assert_eq!(modes.flight_director, "1 FD 2");
    }

    #[test]
    fn test_fma_vertical_changing() {
        use super::fma;

        let mut telemetry = TelemetrySnapshot {
            vertical_mode: Some(1),
            lateral_mode: Some(1),
            vertical_speed: Some(-800.0),
            ..Default::default()
        };
        let modes = fma(&reading(&telemetry));
        assert_eq!(modes.vertical, Some("DES"));
        assert_eq!(modes.lateral, Some("NAV"));
        assert_eq!(modes.autopilot, None);
        assert!(!modes.autothrust);

        telemetry.vertical_speed = None;
        telemetry.selected_altitude = Some(12000.0);
        telemetry.altitude = Some(8000.0);
        assert_eq!(fma(&reading(&telemetry)).vertical, Some("CLB"));
        telemetry.altitude = Some(12000.0);
        assert_eq!(fma(&reading(&telemetry)).vertical, Some("ALT"));
        telemetry.altitude = None;
        assert_eq!(fma(&reading(&telemetry)).vertical, None);

        telemetry.vertical_mode = Some(2);
        telemetry.autopilot = Some(1);
        let modes = fma(&reading(&telemetry));
        assert_eq!(modes.vertical, Some("ALT"));
        assert_eq!(modes.autopilot, Some("AP1"));
        assert_eq!(modes.capability, None);
    }

    #[test]
    fn test_fma_thrust() {
        use super::fma;

        let mut telemetry = TelemetrySnapshot::default();
        let mut takeoff = reading(&telemetry);
        takeoff.phase.takeoff = true;
        assert_eq!(fma(&takeoff).thrust, Some("TOGA"));
        assert_eq!(fma(&reading(&telemetry)).thrust, None);

        telemetry.selected_speed = Some(250.0);
        let modes = fma(&reading(&telemetry));
        assert_eq!(modes.thrust, Some("SPEED"));
        assert!(modes.autothrust);
    }

    #[test]
    fn test_data_block() {
        use super::data_block;

        let telemetry = TelemetrySnapshot {
            callsign: Some("EZY12AB".into()),
            tcas_mode: Some(2),
            groundspeed: Some(431.6),
            wind_direction: Some(85.4),
            wind_speed: Some(23.5),
            heading: Some(45.0),
            static_air_temperature: Some(0.3),
            ..Default::default()
        };
        let data = data_block(&reading(&telemetry));
        assert_eq!(data.callsign.as_ref().map(|c| c.as_str()), Some("EZY12AB"));
        assert_eq!(data.tcas, Some("TA ONLY"));
        assert_eq!(data.groundspeed.as_ref().map(|t| t.as_str()), Some("432"));
        assert_eq!(data.true_airspeed, None);
        let wind = data.wind.unwrap();
        assert_eq!(wind.text.as_str(), "085/24");
        assert!((wind.arrow.unwrap() - 40.4).abs() < 1e-4);
        assert_eq!(data.temperature.as_ref().map(|t| t.as_str()), Some("+0"));

        let telemetry = TelemetrySnapshot {
            tcas_mode: Some(1),
            static_air_temperature: Some(-56.5),
            wind_direction: Some(85.0),
            ..Default::default()
        };
        let data = data_block(&reading(&telemetry));
        assert_eq!(data.tcas, Some("TCAS STBY"));
        assert_eq!(data.wind, None);
        assert_eq!(data.temperature.as_ref().map(|t| t.as_str()), Some("-56"));
    }
}
