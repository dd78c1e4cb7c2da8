//! Fluent builder for constructing a [`Sim`].

use haul_core::{EventSink, NoopSink, SimConfig};
use haul_grid::{AstarPathfinder, Pathfinder, TerrainGrid};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick duration, total ticks, seed
/// - [`TerrainGrid`] — the world the simulation runs on
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default             |
/// |------------------|---------------------|
/// | `.sink(s)`       | [`NoopSink`]        |
/// | `.pathfinder(p)` | [`AstarPathfinder`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, terrain)
///     .sink(Box::new(CsvEventWriter::create("events.csv")?))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Pathfinder = AstarPathfinder> {
    config: SimConfig,
    terrain: TerrainGrid,
    sink: Option<Box<dyn EventSink>>,
    pathfinder: P,
}

impl SimBuilder<AstarPathfinder> {
    /// Create a builder with all required inputs and the default pathfinder.
    pub fn new(config: SimConfig, terrain: TerrainGrid) -> Self {
        Self {
            config,
            terrain,
            sink: None,
            pathfinder: AstarPathfinder,
        }
    }
}

impl<P: Pathfinder> SimBuilder<P> {
    /// Supply the event sink all simulation events are emitted into.
    pub fn sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Swap in a custom pathfinding implementation.
    pub fn pathfinder<Q: Pathfinder>(self, pathfinder: Q) -> SimBuilder<Q> {
        SimBuilder {
            config: self.config,
            terrain: self.terrain,
            sink: self.sink,
            pathfinder,
        }
    }

    /// Validate the configuration and construct the simulation.
    pub fn build(self) -> SimResult<Sim<P>> {
        if !(self.config.tick_dt_secs > 0.0) || !self.config.tick_dt_secs.is_finite() {
            return Err(SimError::Config(format!(
                "tick_dt_secs must be positive and finite, got {}",
                self.config.tick_dt_secs
            )));
        }
        let sink = self.sink.unwrap_or_else(|| Box::new(NoopSink));
        Ok(Sim::new(self.config, self.terrain, self.pathfinder, sink))
    }
}
