//! Errors raised while building a molecule or a scene.

use orbital::OrbitalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("atom index {index} out of range for molecule with {len} atoms")]
    AtomIndexOutOfRange { index: usize, len: usize },

    #[error("bond order must be 1, 2 or 3, got {0}")]
    InvalidBondOrder(f64),

    #[error("atom {0} cannot be bonded to itself")]
    SelfBond(usize),

    #[error(transparent)]
    Orbital(#[from] OrbitalError),
}

pub type Result<T> = std::result::Result<T, Error>;
