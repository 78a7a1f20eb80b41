use crate::orbital::OrbitalType;
use thiserror::Error;

/// Errors raised while preparing an orbital field.
///
/// All of them are recoverable: a caller rendering several orbitals can
/// report the failing one and keep going with the rest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitalError {
    #[error("unknown orbital type: {0:?} (expected s, px, py or pz)")]
    UnknownOrbital(String),

    #[error("no {orbital} orbital radius tabulated for element {symbol}")]
    MissingRadius { symbol: String, orbital: OrbitalType },

    #[error("orbital radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

pub type Result<T> = std::result::Result<T, OrbitalError>;
