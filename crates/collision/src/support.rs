use convex_math::Point;
use either::Either;

/// A trait for convex shapes that are representable by a support mapping function.
///
/// A "support mapping function", or just "support function", finds the point of a convex shape
/// that is furthest in a given direction. The provided direction and the returned point produce a
/// supporting plane, which touches the shape in at least one point and has every point of the
/// shape on the side opposite the direction. Any convex shape is uniquely determined by its
/// support function, which makes it the only thing GJK needs to know about a shape.
pub trait SupportMap<N> {
    /// Produce the point of the shape furthest in the given normalized direction.
    ///
    /// The function is allowed to assume the given direction is non-NaN and normalized, and may
    /// return inaccurate results if it is not.
    fn support(&self, ndir: Point<N>) -> Point<N>;

    /// A reference point of the shape.
    ///
    /// This is only used to pick the first search direction, so any point inside the shape will
    /// give correct results. Central points give the fewest iterations.
    fn center(&self) -> Point<N>;
}

impl<S, N> SupportMap<N> for &S
where
    S: SupportMap<N> + ?Sized,
{
    fn support(&self, ndir: Point<N>) -> Point<N> {
        (**self).support(ndir)
    }

    fn center(&self) -> Point<N> {
        (**self).center()
    }
}

impl<S, N> SupportMap<N> for Box<S>
where
    S: SupportMap<N> + ?Sized,
{
    fn support(&self, ndir: Point<N>) -> Point<N> {
        (**self).support(ndir)
    }

    fn center(&self) -> Point<N> {
        (**self).center()
    }
}

impl<A, B, N> SupportMap<N> for Either<A, B>
where
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    fn support(&self, ndir: Point<N>) -> Point<N> {
        match self {
            Either::Left(sm) => sm.support(ndir),
            Either::Right(sm) => sm.support(ndir),
        }
    }

    fn center(&self) -> Point<N> {
        match self {
            Either::Left(sm) => sm.center(),
            Either::Right(sm) => sm.center(),
        }
    }
}
