//! Destinations for log records.

use crate::error::Result;
use crate::record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};

/// Where a [`crate::Logger`] delivers its records.
///
/// Cloning a sink shares the destination: clones of a file sink feed the same
/// writer thread, clones of a memory sink append to the same buffer.
#[derive(Debug, Clone)]
pub(crate) enum Sink {
    File(Sender<LogRecord>),
    Memory(Arc<Mutex<Vec<LogRecord>>>),
    Console,
}

impl Sink {
    /// Opens `log_path` in append mode and spawns its writer thread.
    pub fn file(log_path: &Path) -> Result<Self> {
        let writer = FileWriter::open(log_path)?;
        let (sender, receiver) = channel();
        std::thread::spawn(move || writer.run(receiver));
        Ok(Sink::File(sender))
    }

    pub fn memory() -> Self {
        Sink::Memory(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn deliver(&self, record: LogRecord) {
        match self {
            // The writer thread only goes away with the last sender.
            Sink::File(sender) => {
                let _ = sender.send(record);
            }
            Sink::Memory(buffer) => match buffer.lock() {
                Ok(mut records) => records.push(record),
                Err(poisoned) => poisoned.into_inner().push(record),
            },
            Sink::Console => println!("{}", record.format()),
        }
    }

    /// Formatted records held by a memory sink; empty for the other sinks.
    pub fn snapshot(&self) -> Vec<String> {
        match self {
            Sink::File(_) | Sink::Console => Vec::new(),
            Sink::Memory(buffer) => {
                let records = match buffer.lock() {
                    Ok(records) => records,
                    Err(poisoned) => poisoned.into_inner(),
                };
                records.iter().map(LogRecord::format).collect()
            }
        }
    }
}

/// Appends records to a file from a dedicated thread.
struct FileWriter {
    file: File,
}

impl FileWriter {
    fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    fn write_record(&mut self, record: &LogRecord) {
        let line = format!("{}\n", record.format());
        if let Err(e) = self.file.write_all(line.as_bytes()) {
            eprintln!("Error writing log: {}", e);
            return;
        }
        if let Err(e) = self.file.flush() {
            eprintln!("Error flushing log: {}", e);
        }
    }

    /// Runs until every sender has been dropped.
    fn run(mut self, receiver: Receiver<LogRecord>) {
        for record in receiver {
            self.write_record(&record);
        }
    }
}
