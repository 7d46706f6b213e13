use core::fmt;

use super::{measurement::Pressure, Name};

/// Longer names keep their first characters instead of failing the whole snapshot
fn truncated_name<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Name>, D::Error> {
    struct NameVisitor;

    impl<'de> serde::de::Visitor<'de> for NameVisitor {
        type Value = Option<Name>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("name string")
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(self)
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let mut name = Name::new();
            for c in value.chars() {
                if name.push(c).is_err() {
                    break;
                }
            }
            Ok(Some(name))
        }
    }

    deserializer.deserialize_option(NameVisitor)
}

/// Autopilot vertical mode as reported by the aircraft
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VerticalMode {
    Unknown,
    /// Climbing or descending towards the selected altitude
    Changing,
    Hold,
    Approach,
}

impl From<u8> for VerticalMode {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Changing,
            2 => Self::Hold,
            3 => Self::Approach,
            _ => Self::Unknown,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LateralMode {
    Unknown,
    Navigation,
    Localizer,
}

impl From<u8> for LateralMode {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Navigation,
            2 => Self::Localizer,
            _ => Self::Unknown,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TcasMode {
    Unknown,
    Standby,
    TrafficAdvisoryOnly,
}

impl From<u8> for TcasMode {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Standby,
            2 => Self::TrafficAdvisoryOnly,
            _ => Self::Unknown,
        }
    }
}

/// One tick of telemetry. Any field may be missing on a given tick.
///
/// Units: speeds in knots, altitudes in feet, vertical speed in ft/min,
/// angles in degrees, temperature in °C.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TelemetrySnapshot {
    pub icao: Option<u32>,
    #[serde(deserialize_with = "truncated_name")]
    pub callsign: Option<Name>,
    #[serde(deserialize_with = "truncated_name")]
    pub aircraft_type: Option<Name>,
    pub on_surface: Option<bool>,
    #[serde(rename = "was-on-surface-60s-ago")]
    pub was_on_surface_60s_ago: Option<bool>,
    pub runway_altitude_estimate: Option<f32>,
    /// Speed of the rendered model, always available while the track plays
    pub model_speed: Option<f32>,
    pub indicated_airspeed: Option<f32>,
    pub true_airspeed: Option<f32>,
    pub groundspeed: Option<f32>,
    pub selected_speed: Option<f32>,
    pub mach: Option<f32>,
    pub altitude: Option<f32>,
    pub radio_altitude: Option<f32>,
    pub qnh: Option<Pressure>,
    pub vertical_speed: Option<f32>,
    pub heading: Option<f32>,
    pub track: Option<f32>,
    pub roll: Option<f32>,
    pub selected_altitude: Option<f32>,
    pub selected_heading: Option<f32>,
    /// -1 when unknown, 0 disengaged, otherwise engaged
    pub autopilot: Option<i8>,
    pub vertical_mode: Option<u8>,
    pub lateral_mode: Option<u8>,
    pub tcas_mode: Option<u8>,
    pub wind_speed: Option<f32>,
    pub wind_direction: Option<f32>,
    pub static_air_temperature: Option<f32>,
}

impl TelemetrySnapshot {
    pub fn on_surface(&self) -> bool {
        self.on_surface == Some(true)
    }

    /// Reported airborne; an absent flag is neither on surface nor airborne.
    pub fn airborne(&self) -> bool {
        self.on_surface == Some(false)
    }

    pub fn was_on_surface(&self) -> bool {
        self.was_on_surface_60s_ago == Some(true)
    }

    pub fn was_airborne(&self) -> bool {
        self.was_on_surface_60s_ago == Some(false)
    }

    pub fn vertical_mode(&self) -> Option<VerticalMode> {
        self.vertical_mode.map(VerticalMode::from)
    }

    pub fn lateral_mode(&self) -> Option<LateralMode> {
        self.lateral_mode.map(LateralMode::from)
    }

    pub fn tcas_mode(&self) -> Option<TcasMode> {
        self.tcas_mode.map(TcasMode::from)
    }
}

mod test {
    #[test]
    fn test_deserialize_partial_snapshot() {
        use super::{TelemetrySnapshot, VerticalMode};
        use crate::types::measurement::Pressure;

        let json = r#"{
            "icao": 4229220,
            "callsign": "BAW123G",
            "on-surface": false,
            "was-on-surface-60s-ago": true,
            "altitude": 1200.0,
            "qnh": 1003.0,
            "vertical-mode": 3
        }"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.icao, Some(4229220));
        assert_eq!(snapshot.callsign.as_ref().map(|c| c.as_str()), Some("BAW123G"));
        assert!(snapshot.airborne());
        assert!(!snapshot.on_surface());
        assert!(snapshot.was_on_surface());
        assert_eq!(snapshot.qnh, Some(Pressure(1003.0)));
        assert_eq!(snapshot.vertical_mode(), Some(VerticalMode::Approach));
        assert_eq!(snapshot.heading, None);
        assert_eq!(snapshot.model_speed, None);
    }

    #[test]
    fn test_long_aircraft_type() {
        use super::TelemetrySnapshot;

        let json = r#"{"icao": 1, "altitude": 1200.0, "aircraft-type": "Airbus A320-214 neo"}"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.altitude, Some(1200.0));
        assert_eq!(snapshot.aircraft_type.as_ref().map(|t| t.as_str()), Some("Airbus A320-214 "));

        let json = r#"{"callsign": null, "aircraft-type": "A20N"}"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.callsign, None);
        assert_eq!(snapshot.aircraft_type.as_ref().map(|t| t.as_str()), Some("A20N"));
    }

    #[test]
    fn test_absent_surface_flag() {
        use super::TelemetrySnapshot;

        let snapshot = TelemetrySnapshot::default();
        assert!(!snapshot.on_surface());
        assert!(!snapshot.airborne());
        assert!(!snapshot.was_on_surface());
        assert!(!snapshot.was_airborne());
    }
}
