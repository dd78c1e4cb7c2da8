use haul_core::EntityId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("entity {0} has no movement record")]
    UnitNotFound(EntityId),

    #[error("entity {0} already has a movement record")]
    AlreadyRegistered(EntityId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
