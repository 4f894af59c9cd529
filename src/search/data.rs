// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::io::Write;
use std::sync::Mutex;

use csv::Writer;

/// Statistics about one completed iteration of an iterative search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub position: String,
    pub depth: u32,
    pub nodes: u64,
    pub best_move: String,
    pub score: String,
    pub elapsed_ms: u64,
}

pub trait DataRecorder {
    fn record(&self, rec: &Record);
}

pub struct NullDataRecorder;
impl DataRecorder for NullDataRecorder {
    fn record(&self, _rec: &Record) {}
}

/// Keeps every record in memory.
#[derive(Default)]
pub struct VecDataRecorder {
    records: Mutex<Vec<Record>>,
}

impl VecDataRecorder {
    pub fn new() -> VecDataRecorder {
        Default::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .expect("recorder lock was poisoned")
            .clone()
    }
}

impl DataRecorder for VecDataRecorder {
    fn record(&self, rec: &Record) {
        self.records
            .lock()
            .expect("recorder lock was poisoned")
            .push(rec.clone());
    }
}

pub struct CsvDataRecorder<W: Write> {
    writer: Mutex<Writer<W>>,
}

impl<W: Write> CsvDataRecorder<W> {
    pub fn new(writer: W) -> CsvDataRecorder<W> {
        CsvDataRecorder {
            writer: Mutex::new(Writer::from_writer(writer)),
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.writer
            .into_inner()
            .ok()
            .and_then(|writer| writer.into_inner().ok())
    }
}

impl<W: Write> DataRecorder for CsvDataRecorder<W> {
    fn record(&self, rec: &Record) {
        let mut writer = self.writer.lock().expect("recorder lock was poisoned");
        if let Err(e) = writer.serialize(rec) {
            warn!("failed to write search record: {}", e);
            return;
        }

        if let Err(e) = writer.flush() {
            warn!("failed to flush search records: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::Reader;

    fn record(depth: u32) -> Record {
        Record {
            position: "..../..../1..2/.... 2".to_owned(),
            depth,
            nodes: 10 * u64::from(depth),
            best_move: "b3".to_owned(),
            score: "1.5".to_owned(),
            elapsed_ms: 0,
        }
    }

    #[test]
    fn csv_round_trip() {
        let recorder = CsvDataRecorder::new(vec![]);
        recorder.record(&record(1));
        recorder.record(&record(2));
        let bytes = recorder.into_inner().unwrap();

        let mut reader = Reader::from_reader(&bytes[..]);
        let records: Vec<Record> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(vec![record(1), record(2)], records);
    }

    #[test]
    fn vec_recorder_keeps_order() {
        let recorder = VecDataRecorder::new();
        recorder.record(&record(1));
        recorder.record(&record(3));
        let depths: Vec<u32> = recorder.records().iter().map(|r| r.depth).collect();
        assert_eq!(vec![1, 3], depths);
    }
}
