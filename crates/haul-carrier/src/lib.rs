//! `haul-carrier` — carrier lifecycle, fatigue, jobs, and building inventories.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`state`]      | `CarrierState`, `CarrierStatus`, `FatigueLevel`              |
//! | [`job`]        | `CarrierJob` — the pickup → deliver → return-home cycle      |
//! | [`manager`]    | `CarrierManager` — registry, admission, job assignment       |
//! | [`inventory`]  | `InventoryProvider` trait + slot-based `InventoryTable`      |
//! | [`completion`] | Job completion handlers producing `JobOutcome`               |
//! | [`error`]      | `CarrierError`, `CarrierResult<T>`                           |
//!
//! # Job cycle
//!
//! A carrier at rest is `Idle` with no job.  Assignment gives it a
//! [`CarrierJob::Pickup`] and sets it `Walking`; each arrival hands the job to
//! a completion handler, which performs the inventory transfer, emits the
//! matching [`haul_core::Event`], and names the `next_job` the carrier should
//! take.  The cycle always funnels back through `ReturnHome`, so fatigue is
//! paid and admission re-checked between any two transport assignments.
//!
//! Failures en route (a demolished source or destination) are expected
//! conditions: the handler reports them inside [`completion::JobOutcome`] and
//! degrades the carrier to its return leg.  Only contract violations — calling
//! a completion with no active job, or completing a pickup without telling the
//! handler where the cargo goes — surface as [`error::CarrierError`].

pub mod completion;
pub mod error;
pub mod inventory;
pub mod job;
pub mod manager;
pub mod state;


pub use completion::{complete_current_job, JobOutcome};
pub use error::{CarrierError, CarrierResult};
pub use inventory::{InventoryProvider, InventoryTable, SLOT_CAPACITY};
pub use job::CarrierJob;
pub use manager::CarrierManager;
pub use state::{CarrierState, CarrierStatus, FatigueLevel};
