//! Building inventories: the transfer contract and a slot-based table.

use haul_core::{EntityId, Material};
use rustc_hash::FxHashMap;

/// Units of one material a single inventory slot holds.
pub const SLOT_CAPACITY: u32 = 8;

// ── InventoryProvider ─────────────────────────────────────────────────────────

/// What the job completion handlers need from the economy layer.
///
/// All transfers are partial-tolerant: a deposit returns how much was
/// accepted, a withdrawal how much was granted.  Unknown buildings accept and
/// grant nothing — a building demolished mid-job is an expected condition,
/// not an error.
pub trait InventoryProvider {
    fn has_building(&self, id: EntityId) -> bool;

    /// Deposit into the building's input side.  Returns the accepted amount,
    /// possibly less than `amount` when the slot is near capacity.
    fn deposit_input(&mut self, id: EntityId, material: Material, amount: u32) -> u32;

    /// Deposit into the building's output side (production results).
    fn deposit_output(&mut self, id: EntityId, material: Material, amount: u32) -> u32;

    /// Withdraw from the building's output side.  Returns the granted amount,
    /// at most the current stock.
    fn withdraw_output(&mut self, id: EntityId, material: Material, amount: u32) -> u32;

    fn output_stock(&self, id: EntityId, material: Material) -> u32;

    fn input_stock(&self, id: EntityId, material: Material) -> u32;
}

// ── InventoryTable ────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Debug, Default)]
struct BuildingSlots {
    input:  FxHashMap<Material, u32>,
    output: FxHashMap<Material, u32>,
}

/// Concrete per-building inventory with one capacity-limited slot per
/// material on each side.
#[derive(Default)]
pub struct InventoryTable {
    buildings: FxHashMap<EntityId, BuildingSlots>,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `id` an (empty) inventory.  Registering twice is harmless and
    /// keeps the existing stock.
    pub fn register_building(&mut self, id: EntityId) {
        self.buildings.entry(id).or_default();
    }

    /// Drop `id`'s inventory, stock included.  `false` if absent.
    pub fn remove_building(&mut self, id: EntityId) -> bool {
        self.buildings.remove(&id).is_some()
    }

    fn deposit(slot: &mut FxHashMap<Material, u32>, material: Material, amount: u32) -> u32 {
        let stock = slot.entry(material).or_insert(0);
        let accepted = amount.min(SLOT_CAPACITY.saturating_sub(*stock));
        *stock += accepted;
        accepted
    }

    fn withdraw(slot: &mut FxHashMap<Material, u32>, material: Material, amount: u32) -> u32 {
        let Some(stock) = slot.get_mut(&material) else {
            return 0;
        };
        let granted = amount.min(*stock);
        *stock -= granted;
        granted
    }
}

impl InventoryProvider for InventoryTable {
    fn has_building(&self, id: EntityId) -> bool {
        self.buildings.contains_key(&id)
    }

    fn deposit_input(&mut self, id: EntityId, material: Material, amount: u32) -> u32 {
        match self.buildings.get_mut(&id) {
            Some(b) => Self::deposit(&mut b.input, material, amount),
            None => 0,
        }
    }

    fn deposit_output(&mut self, id: EntityId, material: Material, amount: u32) -> u32 {
        match self.buildings.get_mut(&id) {
            Some(b) => Self::deposit(&mut b.output, material, amount),
            None => 0,
        }
    }

    fn withdraw_output(&mut self, id: EntityId, material: Material, amount: u32) -> u32 {
        match self.buildings.get_mut(&id) {
            Some(b) => Self::withdraw(&mut b.output, material, amount),
            None => 0,
        }
    }

    fn output_stock(&self, id: EntityId, material: Material) -> u32 {
        self.buildings
            .get(&id)
            .and_then(|b| b.output.get(&material))
            .copied()
            .unwrap_or(0)
    }

    fn input_stock(&self, id: EntityId, material: Material) -> u32 {
        self.buildings
            .get(&id)
            .and_then(|b| b.input.get(&material))
            .copied()
            .unwrap_or(0)
    }
}
