use core::fmt::Write;

#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

pub mod measurement;
pub mod telemetry;

/// Short display text, e.g. a tape label or an annunciation
pub type Text = heapless::String<12>;
/// Callsign or aircraft type designator
pub type Name = heapless::String<16>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rounds half-way cases towards positive infinity, as the panel did, so -2.5 becomes -2.
pub fn round(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Formats `value` as an integer zero padded to `width` digits.
pub fn padded(value: i32, width: usize) -> Text {
    let mut text = Text::new();
    write!(text, "{:0width$}", value, width = width).ok();
    text
}

pub fn integer(value: i32) -> Text {
    padded(value, 0)
}

mod test {
    #[test]
    fn test_round() {
        use super::round;

        assert_eq!(round(2.5), 3);
        assert_eq!(round(-2.5), -2);
        assert_eq!(round(-0.4), 0);
        assert_eq!(round(249.4), 249);
    }

    #[test]
    fn test_padded() {
        use super::{integer, padded};

        assert_eq!(padded(40, 3).as_str(), "040");
        assert_eq!(padded(10000, 3).as_str(), "10000");
        assert_eq!(padded(5, 2).as_str(), "05");
        assert_eq!(integer(-12).as_str(), "-12");
    }
}
