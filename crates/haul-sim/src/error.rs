use haul_carrier::CarrierError;
use haul_core::TileCoord;
use haul_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("spawn tile {0} is already occupied")]
    SpawnBlocked(TileCoord),

    #[error(transparent)]
    Carrier(#[from] CarrierError),

    #[error(transparent)]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
