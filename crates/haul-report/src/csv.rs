//! CSV event sink.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use haul_core::{Event, EventSink, Tick};

use crate::{EventRow, ReportError, ReportResult};

/// Writes one CSV row per simulation event.
///
/// `EventSink::emit` cannot fail, so write errors are stored internally;
/// only the first error is kept.  Call [`finish`][Self::finish] after the
/// run to flush and surface it.
pub struct CsvEventWriter {
    writer: Writer<File>,
    last_error: Option<ReportError>,
    finished: bool,
}

impl CsvEventWriter {
    /// Open (or create) the CSV file at `path` and write the header row.
    pub fn create(path: &Path) -> ReportResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(EventRow::HEADER)?;
        Ok(Self {
            writer,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Flush buffered rows to disk.
    pub fn flush(&mut self) -> ReportResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and report the first error seen during the run, if any.
    /// Idempotent.
    pub fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl EventSink for CsvEventWriter {
    fn emit(&mut self, tick: Tick, event: &Event) {
        let row = EventRow::from_event(tick, event);
        let result = self.writer.write_record(row.record()).map_err(ReportError::from);
        self.store_err(result);
    }
}
