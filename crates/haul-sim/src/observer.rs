//! Tick callbacks for progress reporting and data collection.

use haul_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, arrived: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {arrived} carriers arrived");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `arrived` is the number of carriers
    /// that completed a path this tick.
    fn on_tick_end(&mut self, _tick: Tick, _arrived: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
