use std::fmt;

use convex_math::{DegenerateDirection, Point, Vector};
use thiserror::Error;

use crate::{
    simplex::{Evolution, Simplex},
    support::SupportMap,
    support_ext::MinkowskiDifference,
};

#[derive(Debug, Copy, Clone)]
pub struct Settings {
    /// If the GJK algorithm has not otherwise terminated after this number of support queries,
    /// it gives up with `GjkError::IterationLimit`.
    pub max_iterations: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_iterations: 128,
        }
    }
}

/// The result of the GJK algorithm.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The origin is inside the support map or on its boundary.
    Intersecting,
    /// A plane separating the support map from the origin was found.
    Separated,
}

impl Outcome {
    pub fn is_intersecting(self) -> bool {
        self == Outcome::Intersecting
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum GjkError {
    #[error(transparent)]
    DegenerateDirection(#[from] DegenerateDirection),
    #[error("no result after {iterations} iterations")]
    IterationLimit { iterations: u32 },
}

/// Use the GJK algorithm to determine whether the given support map contains the origin.
///
/// Applied to the Minkowski difference of two shapes, this determines whether the shapes
/// intersect. The first search direction points from the support map's center towards the
/// origin, which for a Minkowski difference `A - B` is the direction from the center of `A`
/// to the center of `B`.
pub fn gjk<N, S>(settings: &Settings, support: S) -> Result<Outcome, GjkError>
where
    N: num::Float + fmt::Debug,
    S: SupportMap<N>,
{
    let origin = Point::origin();

    // The initial direction only matters for the iteration count, so any axis will do when the
    // centers coincide.
    let direction = Vector::new(support.center(), origin)
        .direction()
        .unwrap_or_else(|_| Point::new(N::one(), N::zero(), N::zero()));

    let first = support.support(direction);
    if first == origin {
        log::debug!("gjk: first support point is the origin, touching");
        return Ok(Outcome::Intersecting);
    }

    let mut simplex = Simplex::point(first);
    let mut direction = Vector::new(first, origin).direction()?;

    for iteration in 0..settings.max_iterations {
        let point = support.support(direction);
        log::trace!("gjk iteration {iteration}: support {point:?} along {direction:?}");

        // Progress is always measured from the first point in the simplex.
        if Vector::new(simplex[0], point).dot(direction) <= N::zero() {
            log::debug!("gjk: no progress past {:?}, separated", simplex[0]);
            return Ok(Outcome::Separated);
        }

        // The furthest point along `direction` does not reach the origin, so the plane through
        // it is a separating plane.
        if point.dot(direction) < N::zero() {
            log::debug!("gjk: separating plane found after {iteration} iterations");
            return Ok(Outcome::Separated);
        }

        simplex.push(point);
        match simplex.evolve()? {
            Evolution::ContainsOrigin => {
                log::debug!(
                    "gjk: origin enclosed by {} point simplex after {iteration} iterations",
                    simplex.len()
                );
                return Ok(Outcome::Intersecting);
            }
            Evolution::Search(next) => direction = next,
        }
    }

    Err(GjkError::IterationLimit {
        iterations: settings.max_iterations,
    })
}

/// Returns true if the two convex shapes share at least one point, boundaries included.
pub fn intersects<N, A, B>(a: A, b: B) -> Result<bool, GjkError>
where
    N: num::Float + fmt::Debug,
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    intersects_with::<N, A, B>(&Settings::default(), a, b)
}

pub fn intersects_with<N, A, B>(settings: &Settings, a: A, b: B) -> Result<bool, GjkError>
where
    N: num::Float + fmt::Debug,
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    Ok(gjk::<N, _>(settings, MinkowskiDifference(a, b))?.is_intersecting())
}
