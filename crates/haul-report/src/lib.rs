//! `haul-report` — event reporting for the hexhaul simulation.
//!
//! Provides [`CsvEventWriter`], an event sink that records every simulation
//! event as one CSV row.  Because [`haul_core::EventSink`] is fire-and-forget,
//! write errors are stored internally; check them with
//! [`CsvEventWriter::take_error`] or on [`CsvEventWriter::finish`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use haul_report::CsvEventWriter;
//!
//! let writer = CsvEventWriter::create(Path::new("events.csv"))?;
//! let mut sim = SimBuilder::new(config, terrain)
//!     .sink(Box::new(writer))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvEventWriter;
pub use error::{ReportError, ReportResult};
pub use row::EventRow;
