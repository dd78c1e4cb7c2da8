//! Job completion handlers.
//!
//! Called by the tick loop when a carrier arrives at its job target.  Each
//! handler performs the inventory transfer, emits the matching event, and
//! names the next leg of the job cycle.  Expected failures (a source or
//! destination demolished mid-walk) degrade inside [`JobOutcome`]; only
//! contract violations surface as [`CarrierError`].

use haul_core::{EntityId, Event, EventSink, Material, Tick};

use crate::{CarrierError, CarrierJob, CarrierManager, CarrierResult, CarrierStatus, InventoryProvider};

// ── JobOutcome ────────────────────────────────────────────────────────────────

/// The result of completing one job leg.
#[derive(Clone, PartialEq, Debug)]
pub struct JobOutcome {
    /// Whether the leg achieved its purpose.  A failed leg still produces a
    /// `next_job` — carriers never strand, they walk home.
    pub success: bool,

    /// The leg the carrier should take next, `None` once the cycle is done.
    pub next_job: Option<CarrierJob>,

    /// Human-readable description of what went wrong, on failure.
    pub error: Option<String>,

    /// Units of cargo that did not fit at the destination and were lost.
    pub overflow: u32,
}

impl JobOutcome {
    fn success(next_job: Option<CarrierJob>) -> Self {
        Self { success: true, next_job, error: None, overflow: 0 }
    }

    fn failure(error: String, next_job: Option<CarrierJob>) -> Self {
        Self { success: false, next_job, error: Some(error), overflow: 0 }
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// Withdraw at the pickup source and chain the delivery leg toward
/// `deliver_to`.
pub fn complete_pickup(
    carrier: EntityId,
    from: EntityId,
    material: Material,
    amount: u32,
    deliver_to: EntityId,
    mgr: &mut CarrierManager,
    inv: &mut dyn InventoryProvider,
    tick: Tick,
    sink: &mut dyn EventSink,
) -> JobOutcome {
    if !inv.has_building(from) {
        return JobOutcome::failure(
            format!("pickup source {from} no longer exists"),
            Some(CarrierJob::ReturnHome),
        );
    }
    let granted = inv.withdraw_output(from, material, amount);
    if granted == 0 {
        return JobOutcome::failure(
            format!("pickup source {from} has no {material} in stock"),
            Some(CarrierJob::ReturnHome),
        );
    }

    mgr.set_carrying(carrier, material, granted);
    sink.emit(
        tick,
        &Event::PickupComplete { carrier, building: from, material, amount: granted },
    );
    JobOutcome::success(Some(CarrierJob::Deliver {
        to: deliver_to,
        material,
        amount: granted,
    }))
}

/// Deposit the carried cargo at the delivery destination.
///
/// Whatever does not fit is lost; the shortfall is reported via
/// [`JobOutcome::overflow`] and on the emitted event so an economy layer can
/// account for it.
pub fn complete_delivery(
    carrier: EntityId,
    to: EntityId,
    mgr: &mut CarrierManager,
    inv: &mut dyn InventoryProvider,
    tick: Tick,
    sink: &mut dyn EventSink,
) -> JobOutcome {
    let Some((material, carried)) = mgr.clear_carrying(carrier) else {
        return JobOutcome::failure(
            format!("carrier {carrier} arrived to deliver with empty hands"),
            Some(CarrierJob::ReturnHome),
        );
    };
    if !inv.has_building(to) {
        // Cargo already off the carrier; no destination means it is gone.
        return JobOutcome::failure(
            format!("delivery destination {to} no longer exists, {carried} {material} lost"),
            Some(CarrierJob::ReturnHome),
        );
    }

    let accepted = inv.deposit_input(to, material, carried);
    let overflow = carried - accepted;
    sink.emit(
        tick,
        &Event::DeliveryComplete { carrier, building: to, material, amount: accepted, overflow },
    );
    JobOutcome {
        success: true,
        next_job: Some(CarrierJob::ReturnHome),
        error: None,
        overflow,
    }
}

/// Close the cycle: the carrier is home, idle, and jobless.
pub fn complete_return_home(
    carrier: EntityId,
    mgr: &mut CarrierManager,
    tick: Tick,
    sink: &mut dyn EventSink,
) -> JobOutcome {
    let home = mgr
        .get_carrier(carrier)
        .map(|s| s.home)
        .unwrap_or_else(|| panic!("no carrier record for {carrier}"));
    mgr.set_status(carrier, CarrierStatus::Idle);
    sink.emit(tick, &Event::ReturnedHome { carrier, home });
    JobOutcome::success(None)
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Complete whatever job `carrier` is currently on.
///
/// Takes the active job off the carrier, runs the matching handler, and
/// installs `next_job` back onto the record so state and outcome agree.
/// `deliver_to` is the destination the dispatcher resolved for the cargo;
/// it is required while completing a pickup and ignored otherwise.
pub fn complete_current_job(
    carrier: EntityId,
    mgr: &mut CarrierManager,
    inv: &mut dyn InventoryProvider,
    deliver_to: Option<EntityId>,
    tick: Tick,
    sink: &mut dyn EventSink,
) -> CarrierResult<JobOutcome> {
    let job = mgr
        .get_carrier(carrier)
        .and_then(|s| s.job)
        .ok_or(CarrierError::NoActiveJob(carrier))?;

    // Validate before consuming the job so contract violations leave the
    // carrier record untouched.
    if matches!(job, CarrierJob::Pickup { .. }) && deliver_to.is_none() {
        return Err(CarrierError::MissingDeliverTarget(carrier));
    }

    mgr.complete_job(carrier);
    let outcome = match job {
        CarrierJob::Pickup { from, material, amount } => {
            let to = deliver_to.ok_or(CarrierError::MissingDeliverTarget(carrier))?;
            complete_pickup(carrier, from, material, amount, to, mgr, inv, tick, sink)
        }
        CarrierJob::Deliver { to, .. } => complete_delivery(carrier, to, mgr, inv, tick, sink),
        CarrierJob::ReturnHome => complete_return_home(carrier, mgr, tick, sink),
    };

    mgr.set_job(carrier, outcome.next_job);
    Ok(outcome)
}
