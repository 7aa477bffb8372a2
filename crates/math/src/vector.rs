use crate::{DegenerateDirection, Point};

/// A vector in 3-space, stored as a start point and an end point.
///
/// Length and direction are derived from the pair on demand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<N> {
    pub start: Point<N>,
    pub end: Point<N>,
}

impl<N: num::Zero> Default for Vector<N> {
    fn default() -> Self {
        Self {
            start: Point::origin(),
            end: Point::origin(),
        }
    }
}

impl<N> Vector<N> {
    #[must_use]
    pub const fn new(start: Point<N>, end: Point<N>) -> Self {
        Self { start, end }
    }
}

impl<N: num::Zero> Vector<N> {
    /// A vector starting at the origin.
    #[must_use]
    pub fn from_origin(end: Point<N>) -> Self {
        Self::new(Point::origin(), end)
    }
}

impl<N: num::Float> Vector<N> {
    /// The displacement `end - start`, as a free position vector.
    #[must_use]
    pub fn arrow(self) -> Point<N> {
        self.end - self.start
    }

    #[must_use]
    pub fn length(self) -> N {
        self.arrow().distance()
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.length() == N::zero()
    }

    /// The unit direction of this vector, as a point on the unit sphere.
    ///
    /// Fails if the start and end points coincide.
    pub fn direction(self) -> Result<Point<N>, DegenerateDirection> {
        self.arrow().normalized()
    }

    /// The dot product of this vector's arrow with the given direction.
    #[must_use]
    pub fn dot(self, direction: Point<N>) -> N {
        self.arrow().dot(direction)
    }

    /// The cross product of the arrows of both vectors, anchored at the origin.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        let [sx, sy, sz] = self.arrow().into_array();
        let [vx, vy, vz] = rhs.arrow().into_array();
        Self::from_origin(Point::new(
            sy * vz - sz * vy,
            sz * vx - sx * vz,
            sx * vy - sy * vx,
        ))
    }
}

/// The vector triple product `(v1 x v2) x v3`.
///
/// For an edge `v1 = v3` and a vector `v2` towards a target point, this yields a vector
/// perpendicular to the edge, lying in the plane of `v1` and `v2`, pointing towards the
/// target side. Argument order matters.
#[must_use]
pub fn triple_product<N: num::Float>(v1: Vector<N>, v2: Vector<N>, v3: Vector<N>) -> Vector<N> {
    v1.cross(v2).cross(v3)
}
