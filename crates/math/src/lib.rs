pub mod point;
pub mod vector;

use thiserror::Error;

pub use self::{
    point::Point,
    vector::{Vector, triple_product},
};

/// Returned when a zero-length vector is asked for its direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("cannot take the direction of a zero-length vector")]
pub struct DegenerateDirection;
