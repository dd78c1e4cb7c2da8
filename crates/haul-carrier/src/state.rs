//! Per-carrier state and the fatigue model.

use haul_core::{EntityId, Material};

use crate::CarrierJob;

// ── CarrierStatus ─────────────────────────────────────────────────────────────

/// What the carrier is visibly doing right now.
///
/// Status is presentation-and-admission state; the authoritative "what happens
/// next" lives in [`CarrierState::job`].  A carrier holds a job exactly while
/// its status is not `Idle`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarrierStatus {
    #[default]
    Idle,
    Walking,
    PickingUp,
    Dropping,
    Resting,
}

// ── FatigueLevel ──────────────────────────────────────────────────────────────

/// Coarse fatigue band derived from the 0–100 fatigue counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FatigueLevel {
    /// 0–25.
    Fresh,
    /// 26–50.
    Tired,
    /// 51–75.
    Exhausted,
    /// 76–100.
    Collapsed,
}

impl FatigueLevel {
    /// Band for a clamped fatigue value.
    pub fn from_fatigue(fatigue: u8) -> Self {
        match fatigue {
            0..=25 => FatigueLevel::Fresh,
            26..=50 => FatigueLevel::Tired,
            51..=75 => FatigueLevel::Exhausted,
            _ => FatigueLevel::Collapsed,
        }
    }

    /// Whether a carrier in this band may take on a new transport job.
    ///
    /// Exhausted and collapsed carriers keep working their current job cycle
    /// to its end, but admission refuses them anything new until they have
    /// rested back under the threshold.
    pub fn can_accept_new_job(self) -> bool {
        matches!(self, FatigueLevel::Fresh | FatigueLevel::Tired)
    }
}

// ── CarrierState ──────────────────────────────────────────────────────────────

/// Everything the manager tracks per carrier.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierState {
    /// The tavern this carrier returns to between jobs.
    pub home: EntityId,

    /// Active job, `None` exactly while `status == Idle`.
    pub job: Option<CarrierJob>,

    /// Fatigue counter, always clamped to 0–100.
    pub fatigue: u8,

    /// Cargo in hand between a pickup and its delivery.
    pub carrying: Option<(Material, u32)>,

    pub status: CarrierStatus,
}

impl CarrierState {
    /// Fresh idle carrier homed at `home`.
    pub fn new(home: EntityId) -> Self {
        Self {
            home,
            job: None,
            fatigue: 0,
            carrying: None,
            status: CarrierStatus::Idle,
        }
    }

    #[inline]
    pub fn fatigue_level(&self) -> FatigueLevel {
        FatigueLevel::from_fatigue(self.fatigue)
    }

    /// Idle, jobless, and rested enough for admission.
    pub fn is_available(&self) -> bool {
        self.status == CarrierStatus::Idle
            && self.job.is_none()
            && self.fatigue_level().can_accept_new_job()
    }
}
