use std::ops;

use convex_math::Point;

use crate::support::SupportMap;

/// The Minkowski difference `A - B` of two support maps.
///
/// The difference contains the origin if and only if the two shapes share at least one point:
/// if `p` lies in both, then `p - p` lies in the difference.
#[derive(Debug, Copy, Clone)]
pub struct MinkowskiDifference<A, B>(pub A, pub B);

impl<A, B, N> SupportMap<N> for MinkowskiDifference<A, B>
where
    A: SupportMap<N>,
    B: SupportMap<N>,
    N: Copy + ops::Sub<Output = N> + ops::Neg<Output = N>,
{
    fn support(&self, ndir: Point<N>) -> Point<N> {
        support(&self.0, &self.1, ndir)
    }

    fn center(&self) -> Point<N> {
        self.0.center() - self.1.center()
    }
}

/// A support map moved by a constant offset.
#[derive(Debug, Copy, Clone)]
pub struct Translate<S, N>(pub S, pub Point<N>);

impl<S, N> SupportMap<N> for Translate<S, N>
where
    S: SupportMap<N>,
    N: Copy + ops::Add<Output = N>,
{
    fn support(&self, ndir: Point<N>) -> Point<N> {
        self.0.support(ndir) + self.1
    }

    fn center(&self) -> Point<N> {
        self.0.center() + self.1
    }
}

/// Support of the Minkowski difference of `a` and `b` in the given direction.
pub fn support<A, B, N>(a: &A, b: &B, ndir: Point<N>) -> Point<N>
where
    A: SupportMap<N> + ?Sized,
    B: SupportMap<N> + ?Sized,
    N: Copy + ops::Sub<Output = N> + ops::Neg<Output = N>,
{
    a.support(ndir) - b.support(-ndir)
}

pub trait SupportMapExt<N>: SupportMap<N> {
    /// Takes this support map (A) and the provided one (B) and produces the support map of the
    /// Minkowski difference `A - B`.
    fn minkowski_difference<S>(self, other: S) -> MinkowskiDifference<Self, S>
    where
        Self: Sized,
    {
        MinkowskiDifference(self, other)
    }

    fn translate(self, offset: Point<N>) -> Translate<Self, N>
    where
        Self: Sized,
    {
        Translate(self, offset)
    }
}

impl<S, N> SupportMapExt<N> for S where S: SupportMap<N> {}
