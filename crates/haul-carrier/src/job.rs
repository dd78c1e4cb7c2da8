//! Carrier job descriptions.

use haul_core::{EntityId, Material};

/// The errand a carrier is currently running.
///
/// Jobs form a fixed cycle: `Pickup` → `Deliver` → `ReturnHome`.  The next
/// link is always chosen by the completion handler for the previous one, so
/// callers only ever assign the initial `Pickup`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarrierJob {
    /// Walk to `from` and withdraw up to `amount` of `material` from its
    /// output slots.
    Pickup {
        from: EntityId,
        material: Material,
        amount: u32,
    },

    /// Walk to `to` and deposit the carried `material` into its input slots.
    Deliver {
        to: EntityId,
        material: Material,
        amount: u32,
    },

    /// Walk back to the home tavern and go idle.
    ReturnHome,
}

impl CarrierJob {
    /// Stable job-kind discriminator for logs.
    pub fn kind_str(&self) -> &'static str {
        match self {
            CarrierJob::Pickup { .. } => "pickup",
            CarrierJob::Deliver { .. } => "deliver",
            CarrierJob::ReturnHome => "returnHome",
        }
    }

    /// The building this job walks toward, if it targets one.
    ///
    /// `ReturnHome` has no target here — its destination is the carrier's
    /// `home`, which lives on [`crate::CarrierState`].
    pub fn target(&self) -> Option<EntityId> {
        match self {
            CarrierJob::Pickup { from, .. } => Some(*from),
            CarrierJob::Deliver { to, .. } => Some(*to),
            CarrierJob::ReturnHome => None,
        }
    }
}
