//! Carrier registry: creation, admission, assignment, and fatigue accounting.

use haul_core::EntityId;
use rustc_hash::FxHashMap;

use crate::{CarrierJob, CarrierState, CarrierStatus, FatigueLevel};

/// Owns all [`CarrierState`] records plus a tavern → carriers index.
///
/// # Contract
///
/// Carrier ids come from the entity layer; creating a record for an id twice,
/// or mutating one that was never created, is a programmer error and panics.
/// The one deliberate exception is admission: `can_assign_job_to` /
/// `assign_job` answer `false` for unknown ids so dispatch code can race
/// entity removal without special-casing it.
#[derive(Default)]
pub struct CarrierManager {
    carriers: FxHashMap<EntityId, CarrierState>,
    /// Tavern building → carriers homed there.  Kept in sync by
    /// create/remove/reassign; order within a bucket is not significant.
    by_home: FxHashMap<EntityId, Vec<EntityId>>,
}

impl CarrierManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Create the record for a freshly spawned carrier homed at `home`.
    ///
    /// # Panics
    ///
    /// Panics if `id` already has a record.
    pub fn create_carrier(&mut self, id: EntityId, home: EntityId) {
        let prev = self.carriers.insert(id, CarrierState::new(home));
        assert!(prev.is_none(), "carrier {id} created twice");
        self.by_home.entry(home).or_default().push(id);
    }

    /// Drop a carrier's record and its home-index entry.  `false` if absent.
    pub fn remove_carrier(&mut self, id: EntityId) -> bool {
        let Some(state) = self.carriers.remove(&id) else {
            return false;
        };
        if let Some(bucket) = self.by_home.get_mut(&state.home) {
            bucket.retain(|&c| c != id);
            if bucket.is_empty() {
                self.by_home.remove(&state.home);
            }
        }
        true
    }

    #[inline]
    pub fn has_carrier(&self, id: EntityId) -> bool {
        self.carriers.contains_key(&id)
    }

    #[inline]
    pub fn get_carrier(&self, id: EntityId) -> Option<&CarrierState> {
        self.carriers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All carrier ids, ascending — the fixed iteration order for per-tick
    /// fatigue recovery and wander.
    pub fn carrier_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.carriers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All carriers homed at `building`, ascending by id.
    pub fn carriers_for_tavern(&self, building: EntityId) -> Vec<EntityId> {
        let mut ids = self.by_home.get(&building).cloned().unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// Carriers homed at `building` that admission would accept right now,
    /// ascending by id.
    pub fn available_carriers(&self, building: EntityId) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .by_home
            .get(&building)
            .map(|bucket| {
                bucket
                    .iter()
                    .copied()
                    .filter(|id| self.carriers[id].is_available())
                    .collect()
            })
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// Whether `id` would be accepted for a new job.  Unknown ids are simply
    /// not assignable.
    pub fn can_assign_job_to(&self, id: EntityId) -> bool {
        self.carriers.get(&id).is_some_and(CarrierState::is_available)
    }

    /// Hand `job` to `id` and set it walking.  Returns `false` (and changes
    /// nothing) when admission refuses — missing, busy, or too fatigued.
    pub fn assign_job(&mut self, id: EntityId, job: CarrierJob) -> bool {
        if !self.can_assign_job_to(id) {
            return false;
        }
        let state = self.carriers.get_mut(&id).expect("admission checked presence");
        state.job = Some(job);
        state.status = CarrierStatus::Walking;
        true
    }

    /// Take the active job off `id`, returning it for completion handling.
    ///
    /// Status is untouched — the completion handler decides the transition.
    ///
    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn complete_job(&mut self, id: EntityId) -> Option<CarrierJob> {
        self.state_mut(id).job.take()
    }

    // ── Mutators ──────────────────────────────────────────────────────────
    //
    // All panic on a missing id; see the type-level contract.

    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn set_status(&mut self, id: EntityId, status: CarrierStatus) {
        self.state_mut(id).status = status;
    }

    /// Put `job` on `id` directly, bypassing admission.  Used by completion
    /// handlers to chain the next leg of an in-flight cycle.
    ///
    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn set_job(&mut self, id: EntityId, job: Option<CarrierJob>) {
        self.state_mut(id).job = job;
    }

    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn set_carrying(&mut self, id: EntityId, material: haul_core::Material, amount: u32) {
        self.state_mut(id).carrying = Some((material, amount));
    }

    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn clear_carrying(&mut self, id: EntityId) -> Option<(haul_core::Material, u32)> {
        self.state_mut(id).carrying.take()
    }

    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn set_fatigue(&mut self, id: EntityId, fatigue: u8) {
        self.state_mut(id).fatigue = fatigue.min(100);
    }

    /// Add (or with a negative delta, recover) fatigue, clamped to 0–100.
    ///
    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn add_fatigue(&mut self, id: EntityId, delta: i32) {
        let state = self.state_mut(id);
        state.fatigue = (state.fatigue as i32 + delta).clamp(0, 100) as u8;
    }

    /// # Panics
    ///
    /// Panics if `id` has no record.
    pub fn fatigue_level(&self, id: EntityId) -> FatigueLevel {
        self.state(id).fatigue_level()
    }

    /// Re-home `id` to `new_home`.  Refused (`false`) while a job is active
    /// or when the carrier is unknown.
    pub fn reassign_to_tavern(&mut self, id: EntityId, new_home: EntityId) -> bool {
        match self.carriers.get(&id) {
            Some(state) if state.job.is_none() => {}
            _ => return false,
        }
        let old_home = self.carriers[&id].home;
        if old_home == new_home {
            return true;
        }
        if let Some(bucket) = self.by_home.get_mut(&old_home) {
            bucket.retain(|&c| c != id);
            if bucket.is_empty() {
                self.by_home.remove(&old_home);
            }
        }
        self.by_home.entry(new_home).or_default().push(id);
        self.carriers.get_mut(&id).expect("checked above").home = new_home;
        true
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn state(&self, id: EntityId) -> &CarrierState {
        self.carriers
            .get(&id)
            .unwrap_or_else(|| panic!("no carrier record for {id}"))
    }

    fn state_mut(&mut self, id: EntityId) -> &mut CarrierState {
        self.carriers
            .get_mut(&id)
            .unwrap_or_else(|| panic!("no carrier record for {id}"))
    }
}
