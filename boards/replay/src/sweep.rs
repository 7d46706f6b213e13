use pro_pfd::types::{measurement::Pressure, telemetry::TelemetrySnapshot};

/// Value walking between two bounds, reversing at either end
#[derive(Copy, Clone, Debug, PartialEq)]
struct Bounce {
    value: f32,
    step: f32,
    min: f32,
    max: f32,
}

impl Bounce {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { value: min, step, min, max }
    }

    fn next(&mut self) -> f32 {
        let value = self.value + self.step;
        if value > self.max || value < self.min {
            self.step = -self.step;
        }
        self.value += self.step;
        self.value
    }
}

/// Synthetic telemetry exercising every instrument across its range
pub struct Sweep {
    remain: usize,
    speed: Bounce,
    heading: Bounce,
    altitude: Bounce,
    vertical_speed: Bounce,
    roll: Bounce,
}

impl Sweep {
    pub fn new(ticks: usize) -> Self {
        Self {
            remain: ticks,
            speed: Bounce::new(0.0, 350.0, 0.1),
            heading: Bounce::new(0.0, 360.0, 0.1),
            altitude: Bounce::new(0.0, 45000.0, 1.0),
            vertical_speed: Bounce::new(-7000.0, 7000.0, 10.0),
            roll: Bounce::new(-45.0, 45.0, 0.1),
        }
    }
}

impl Iterator for Sweep {
    type Item = TelemetrySnapshot;

    fn next(&mut self) -> Option<TelemetrySnapshot> {
        if self.remain == 0 {
            return None;
        }
        self.remain -= 1;
        let speed = self.speed.next();
        Some(TelemetrySnapshot {
            icao: Some(0),
            on_surface: Some(false),
            was_on_surface_60s_ago: Some(false),
            model_speed: Some(speed),
            indicated_airspeed: Some(speed),
            altitude: Some(self.altitude.next()),
            qnh: Some(Pressure(1013.25)),
            vertical_speed: Some(self.vertical_speed.next()),
            heading: Some(self.heading.next()),
            roll: Some(self.roll.next()),
            ..Default::default()
        })
    }
}

mod test {
    #[test]
    fn test_bounce() {
        use super::Bounce;

        let mut bounce = Bounce::new(0.0, 2.0, 1.0);
        let values: Vec<f32> = (0..6).map(|_| bounce.next()).collect();
        assert_eq!(values, vec![1.0, 2.0, 1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sweep() {
        use super::Sweep;

        let snapshots: Vec<_> = Sweep::new(3).collect();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].altitude, Some(1.0));
        assert_eq!(snapshots[2].altitude, Some(3.0));
        assert_eq!(snapshots[0].vertical_speed, Some(-6990.0));
        assert!(snapshots.iter().all(|s| s.airborne()));
    }
}
