use haul_core::EntityId;
use thiserror::Error;

/// Contract violations raised by the job completion handlers.
///
/// Expected runtime failures (missing buildings, empty stock) never show up
/// here — they degrade inside [`crate::JobOutcome`] instead.
#[derive(Debug, Error)]
pub enum CarrierError {
    #[error("carrier {0} has no active job to complete")]
    NoActiveJob(EntityId),

    #[error("carrier {0} completed a pickup with no delivery target resolved")]
    MissingDeliverTarget(EntityId),
}

pub type CarrierResult<T> = Result<T, CarrierError>;
