#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;
extern crate pro_pfd;

pub mod sweep;

use std::io::BufRead;

use pro_pfd::types::telemetry::TelemetrySnapshot;

fn default_forward() -> bool {
    true
}

/// One recorded tick, `forward` is false while the track plays backwards
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default = "default_forward")]
    pub forward: bool,
    #[serde(default)]
    pub telemetry: TelemetrySnapshot,
}

/// Reads json-lines records, skipping blank and malformed lines
pub struct Records<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0, buffer: String::new() }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => (),
                Err(e) => {
                    error!("Read line {} failed: {}", self.line + 1, e);
                    return None;
                }
            }
            self.line += 1;
            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(record) => return Some(record),
                Err(e) => warn!("Skip line {}: {}", self.line, e),
            }
        }
    }
}

mod test {
    #[test]
    fn test_read_records() {
        use super::Records;
        use pro_pfd::types::telemetry::TelemetrySnapshot;

        let input = concat!(
            "{\"telemetry\": {\"altitude\": 1200, \"on-surface\": false}}\n",
            "\n",
            "not json\n",
            "{\"forward\": false, \"telemetry\": {\"model-speed\": 120.5}}\n",
            "{}\n",
        );
        let records: Vec<_> = Records::new(input.as_bytes()).collect();
        assert_eq!(records.len(), 3);
        assert!(records[0].forward);
        assert_eq!(records[0].telemetry.altitude, Some(1200.0));
        assert_eq!(records[0].telemetry.on_surface, Some(false));
        assert!(!records[1].forward);
        assert_eq!(records[1].telemetry.model_speed, Some(120.5));
        assert_eq!(records[2].telemetry, TelemetrySnapshot::default());
    }
}
