//! The `Sim` struct, its tick loop, and transport dispatch.

use haul_carrier::{
    complete_current_job, CarrierJob, CarrierManager, CarrierStatus, InventoryTable,
};
use haul_core::{EntityId, EventSink, Material, PlayerId, SimClock, SimConfig, SimRng, TileCoord};
use haul_grid::{BuildingProvider, OccupancyMap, Pathfinder, ServiceAreaIndex, TerrainGrid};
use haul_mobility::{find_random_free_direction, MovementEngine, PositionProvider};
use rustc_hash::FxHashMap;

use crate::{BuildingKind, EntityTable, SimError, SimObserver, SimResult};

// ── Tuning constants ──────────────────────────────────────────────────────────

/// Fatigue gained by a successful pickup.
pub const FATIGUE_PER_PICKUP: i32 = 4;

/// Fatigue gained by a successful delivery.
pub const FATIGUE_PER_DELIVERY: i32 = 6;

/// Fatigue shed per simulated second while idle or resting.
pub const FATIGUE_RECOVERY_PER_SEC: f32 = 0.5;

/// Per-tick probability that an idle carrier shuffles to a free neighbor.
pub const WANDER_CHANCE: f64 = 0.02;

// ── Routing outcome ───────────────────────────────────────────────────────────

/// What happened when a carrier was pointed at its next job destination.
enum Routed {
    /// A path exists; the carrier is walking it.
    Walking,
    /// The carrier already stands on the destination tile.
    AtDestination,
    /// Nothing was reachable; the carrier went idle in place.
    Stranded,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation world: explicit owned collections, no globals.
///
/// `Sim<P>` drives a three-phase tick (see [`Sim::update`]):
///
/// 1. **Movement** — the engine advances every walking unit; arrivals fall
///    out in ascending id order.
/// 2. **Job completion** — each arrived carrier completes its job leg and is
///    routed onto the next one.  Routing failure degrades toward home and
///    finally to idle-in-place; no leg is ever silently retried.
/// 3. **Recovery & wander** — idle and resting carriers shed fatigue in whole
///    points; occasionally an idle carrier shuffles one tile.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Pathfinder> {
    pub config: SimConfig,
    pub clock: SimClock,

    pub terrain: TerrainGrid,
    pub occupancy: OccupancyMap,
    pub entities: EntityTable,

    pub movement: MovementEngine,
    pub carriers: CarrierManager,
    pub inventories: InventoryTable,
    pub areas: ServiceAreaIndex,

    pub pathfinder: P,
    pub rng: SimRng,
    pub sink: Box<dyn EventSink>,

    /// Delivery destination resolved at dispatch time, keyed by carrier.
    /// Consumed when the carrier's pickup completes.
    pending_deliver: FxHashMap<EntityId, EntityId>,

    /// Fractional fatigue recovery carried between ticks; carriers only ever
    /// see whole-point decrements.
    recovery_accum: f32,
}

impl<P: Pathfinder> Sim<P> {
    pub(crate) fn new(
        config: SimConfig,
        terrain: TerrainGrid,
        pathfinder: P,
        sink: Box<dyn EventSink>,
    ) -> Self {
        let clock = config.make_clock();
        let rng = SimRng::new(config.seed);
        Self {
            config,
            clock,
            terrain,
            occupancy: OccupancyMap::new(),
            entities: EntityTable::new(),
            movement: MovementEngine::new(),
            carriers: CarrierManager::new(),
            inventories: InventoryTable::new(),
            areas: ServiceAreaIndex::new(),
            pathfinder,
            rng,
            sink,
            pending_deliver: FxHashMap::default(),
            recovery_accum: 0.0,
        }
    }

    // ── World construction ────────────────────────────────────────────────

    /// Spawn a building with an empty inventory.
    pub fn spawn_building(
        &mut self,
        kind: BuildingKind,
        player: PlayerId,
        pos: TileCoord,
    ) -> EntityId {
        let id = self.entities.spawn_building(kind, player, pos);
        self.inventories.register_building(id);
        id
    }

    /// Spawn a tavern hub: a building plus its service area (radius clamped).
    pub fn spawn_hub(&mut self, player: PlayerId, pos: TileCoord, radius: u32) -> EntityId {
        let id = self.spawn_building(BuildingKind::Tavern, player, pos);
        self.areas.create(id, player, pos, radius);
        id
    }

    /// Spawn a carrier homed at `home`, standing on `tile`.
    ///
    /// Creates the entity, its movement record, and its carrier record, and
    /// claims the tile.  Fails with [`SimError::SpawnBlocked`] when the tile
    /// already has an occupant.
    pub fn spawn_carrier_at(
        &mut self,
        player: PlayerId,
        home: EntityId,
        tile: TileCoord,
        speed: f32,
    ) -> SimResult<EntityId> {
        let id = self.entities.spawn_unit(player, tile);
        if !self.occupancy.claim(tile, id) {
            self.entities.remove(id);
            return Err(SimError::SpawnBlocked(tile));
        }
        self.movement.store.register(id, speed, tile)?;
        self.carriers.create_carrier(id, home);
        Ok(id)
    }

    // ── Transport dispatch ────────────────────────────────────────────────

    /// Request that `amount` of `material` be hauled from building `from` to
    /// building `to`.
    ///
    /// Dispatch resolves, in order: the hubs whose service areas cover both
    /// endpoints, the covering hub nearest to the source, and that hub's
    /// first available carrier.  The carrier gets a `Pickup` job and a path
    /// to the source.  Returns `Ok(false)` — with no state change — when any
    /// link in that chain is missing, including when no path to the source
    /// exists (the assignment is rolled back).
    pub fn request_transport(
        &mut self,
        from: EntityId,
        to: EntityId,
        material: Material,
        amount: u32,
    ) -> SimResult<bool> {
        let (Some(from_pos), Some(to_pos)) = (
            self.entities.building_pos(from),
            self.entities.building_pos(to),
        ) else {
            return Ok(false);
        };

        let hubs = self.areas.hubs_serving_both(from_pos, to_pos, &self.entities);
        let Some(hub) = hubs.into_iter().min_by_key(|&hub| {
            let center = self.areas.get(hub).map(|a| a.center).unwrap_or(from_pos);
            (center.hex_distance(from_pos), hub)
        }) else {
            return Ok(false);
        };

        let Some(&carrier) = self.carriers.available_carriers(hub).first() else {
            return Ok(false);
        };

        if !self.carriers.assign_job(carrier, CarrierJob::Pickup { from, material, amount }) {
            return Ok(false);
        }
        self.pending_deliver.insert(carrier, to);

        let Some(start) = self.entities.position(carrier) else {
            return Ok(self.rollback_assignment(carrier));
        };
        match self.pathfinder.find_path(start, from_pos, &self.terrain, &self.occupancy) {
            Some(path) if path.is_empty() => {
                // Already standing on the source: complete the pickup now.
                self.process_arrival(carrier)?;
                Ok(true)
            }
            Some(path) => {
                self.movement.begin_path(carrier, path)?;
                Ok(true)
            }
            None => Ok(self.rollback_assignment(carrier)),
        }
    }

    /// Undo a just-made assignment that could not be routed.  Always `false`.
    fn rollback_assignment(&mut self, carrier: EntityId) -> bool {
        self.pending_deliver.remove(&carrier);
        self.carriers.set_job(carrier, None);
        self.carriers.set_status(carrier, CarrierStatus::Idle);
        false
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let arrived = self.update(self.clock.tick_dt_secs)?;
            observer.on_tick_end(now, arrived);
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let arrived = self.update(self.clock.tick_dt_secs)?;
            observer.on_tick_end(now, arrived);
        }
        Ok(())
    }

    /// Advance the world by `dt` simulated seconds (one tick).
    ///
    /// Returns the number of carriers that arrived this tick.
    pub fn update(&mut self, dt: f32) -> SimResult<usize> {
        // Phase 1: movement.
        let arrived = self.movement.tick(
            dt,
            &mut self.entities,
            &mut self.occupancy,
            &self.terrain,
            &mut self.rng,
        );

        // Phase 2: job completion, ascending id.
        for &carrier in &arrived {
            self.process_arrival(carrier)?;
        }

        // Phase 2b: carriers displaced by a push lost their path mid-job;
        // give them a fresh route to wherever they were going.
        self.reroute_displaced()?;

        // Phase 3: recovery & wander.
        self.recover_and_wander(dt);

        self.clock.advance();
        Ok(arrived.len())
    }

    /// Complete the arrived carrier's job leg and route it onto the next one.
    ///
    /// Loops because a next leg whose destination is the current tile (e.g. a
    /// delivery back into the building the carrier stands on) completes
    /// immediately.
    fn process_arrival(&mut self, carrier: EntityId) -> SimResult<()> {
        loop {
            let Some(job) = self.carriers.get_carrier(carrier).and_then(|s| s.job) else {
                return Ok(());
            };

            let deliver_to = match job {
                CarrierJob::Pickup { .. } => {
                    self.carriers.set_status(carrier, CarrierStatus::PickingUp);
                    self.pending_deliver.remove(&carrier)
                }
                CarrierJob::Deliver { .. } => {
                    self.carriers.set_status(carrier, CarrierStatus::Dropping);
                    None
                }
                CarrierJob::ReturnHome => None,
            };

            let tick = self.clock.current_tick;
            let outcome = complete_current_job(
                carrier,
                &mut self.carriers,
                &mut self.inventories,
                deliver_to,
                tick,
                self.sink.as_mut(),
            )?;

            if outcome.success {
                match job {
                    CarrierJob::Pickup { .. } => {
                        self.carriers.add_fatigue(carrier, FATIGUE_PER_PICKUP);
                    }
                    CarrierJob::Deliver { .. } => {
                        self.carriers.add_fatigue(carrier, FATIGUE_PER_DELIVERY);
                    }
                    CarrierJob::ReturnHome => {}
                }
            }

            let Some(next) = outcome.next_job else {
                return Ok(());
            };
            match self.route_to(carrier, next)? {
                Routed::Walking | Routed::Stranded => return Ok(()),
                Routed::AtDestination => continue,
            }
        }
    }

    /// Find carriers that are nominally walking a job but have no movement
    /// path left (the push protocol discards a displaced unit's path) and
    /// route them again.  A carrier pushed onto its own destination completes
    /// there and then.
    fn reroute_displaced(&mut self) -> SimResult<()> {
        for carrier in self.carriers.carrier_ids() {
            let Some(state) = self.carriers.get_carrier(carrier) else { continue };
            let Some(job) = state.job else { continue };
            if state.status != CarrierStatus::Walking {
                continue;
            }
            if self.movement.store.get(carrier).is_some_and(|u| u.has_path()) {
                continue;
            }
            if let Routed::AtDestination = self.route_to(carrier, job)? {
                self.process_arrival(carrier)?;
            }
        }
        Ok(())
    }

    /// Point `carrier` at the destination of `job`, degrading on failure:
    /// an unroutable leg becomes `ReturnHome`, and an unroutable home leg
    /// strands the carrier idle in place.
    fn route_to(&mut self, carrier: EntityId, job: CarrierJob) -> SimResult<Routed> {
        let mut job = job;
        loop {
            let dest_building = match job {
                CarrierJob::Pickup { from, .. } => Some(from),
                CarrierJob::Deliver { to, .. } => Some(to),
                CarrierJob::ReturnHome => self.carriers.get_carrier(carrier).map(|s| s.home),
            };
            let dest = dest_building.and_then(|b| self.entities.building_pos(b));
            let start = self.entities.position(carrier);

            if let (Some(start), Some(dest)) = (start, dest) {
                match self.pathfinder.find_path(start, dest, &self.terrain, &self.occupancy) {
                    Some(path) if path.is_empty() => return Ok(Routed::AtDestination),
                    Some(path) => {
                        self.movement.begin_path(carrier, path)?;
                        self.carriers.set_status(carrier, CarrierStatus::Walking);
                        return Ok(Routed::Walking);
                    }
                    None => {}
                }
            }

            if matches!(job, CarrierJob::ReturnHome) {
                // Even home is unreachable: give up where we stand.
                self.carriers.set_job(carrier, None);
                self.carriers.set_status(carrier, CarrierStatus::Idle);
                return Ok(Routed::Stranded);
            }
            job = CarrierJob::ReturnHome;
            self.carriers.set_job(carrier, Some(job));
        }
    }

    /// Phase 3: whole-point fatigue recovery plus the idle wander shuffle.
    fn recover_and_wander(&mut self, dt: f32) {
        self.recovery_accum += FATIGUE_RECOVERY_PER_SEC * dt;
        let points = self.recovery_accum.floor() as i32;
        if points > 0 {
            self.recovery_accum -= points as f32;
        }

        for carrier in self.carriers.carrier_ids() {
            let Some(status) = self.carriers.get_carrier(carrier).map(|s| s.status) else {
                continue;
            };
            if !matches!(status, CarrierStatus::Idle | CarrierStatus::Resting) {
                continue;
            }
            if points > 0 {
                self.carriers.add_fatigue(carrier, -points);
            }
            if status == CarrierStatus::Idle && self.rng.gen_bool(WANDER_CHANCE) {
                self.wander(carrier);
            }
        }
    }

    /// Shuffle an idle carrier one tile, keeping occupancy and the movement
    /// record's interpolation anchor in sync.
    fn wander(&mut self, carrier: EntityId) {
        let Some(pos) = self.entities.position(carrier) else { return };
        let Some(target) =
            find_random_free_direction(pos, &self.terrain, &self.occupancy, &mut self.rng)
        else {
            return;
        };
        if !self.occupancy.relocate(pos, target, carrier) {
            return;
        }
        self.entities.set_position(carrier, target);
        if let Some(unit) = self.movement.store.get_mut(carrier) {
            unit.prev = pos;
        }
    }
}
