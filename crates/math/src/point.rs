use std::{array, ops};

use crate::DegenerateDirection;

/// A position in 3-space.
///
/// `Point` doubles as the representation of a direction: the search directions handed to
/// support functions are points on the unit sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point<N>([N; 3]);

impl<N: num::Zero> Default for Point<N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<N> From<[N; 3]> for Point<N> {
    fn from(a: [N; 3]) -> Self {
        Self(a)
    }
}

impl<N> ops::Index<usize> for Point<N> {
    type Output = N;

    fn index(&self, index: usize) -> &N {
        &self.0[index]
    }
}

impl<N: ops::Neg<Output = N>> ops::Neg for Point<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(|c| -c))
    }
}

impl<N: ops::Add<Output = N> + Copy> ops::Add for Point<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, ops::Add::add)
    }
}

impl<N: ops::Sub<Output = N> + Copy> ops::Sub for Point<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, ops::Sub::sub)
    }
}

impl<N: ops::Mul<Output = N> + Copy> ops::Mul<N> for Point<N> {
    type Output = Self;

    fn mul(self, rhs: N) -> Self {
        Self(self.0.map(|c| c * rhs))
    }
}

impl<N: ops::Div<Output = N> + Copy> ops::Div<N> for Point<N> {
    type Output = Self;

    fn div(self, rhs: N) -> Self {
        Self(self.0.map(|c| c / rhs))
    }
}

impl<N> Point<N> {
    #[must_use]
    pub const fn new(x: N, y: N, z: N) -> Self {
        Self([x, y, z])
    }

    #[must_use]
    pub fn into_array(self) -> [N; 3] {
        self.0
    }

    #[must_use]
    pub fn map<U>(self, f: impl Fn(N) -> U) -> Point<U> {
        Point(self.0.map(f))
    }
}

impl<N: Copy> Point<N> {
    #[must_use]
    pub fn zip<U, V>(self, other: Point<U>, f: impl Fn(N, U) -> V) -> Point<V>
    where
        U: Copy,
    {
        Point(array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<N: num::Zero> Point<N> {
    #[must_use]
    pub fn origin() -> Self {
        Self([N::zero(), N::zero(), N::zero()])
    }
}

impl<N> Point<N>
where
    N: num::Zero + ops::Mul<Output = N> + ops::Add<Output = N> + Copy,
{
    /// Dot product of two points taken as position vectors.
    ///
    /// This is the "direction with direction" product; for the product of a `Vector` with a
    /// direction see [`crate::Vector::dot`].
    #[must_use]
    pub fn dot(self, rhs: Self) -> N {
        self.0
            .into_iter()
            .zip(rhs.0)
            .fold(N::zero(), |acc, (a, b)| acc + a * b)
    }
}

impl<N: num::Float> Point<N> {
    /// Euclidean distance from the origin.
    #[must_use]
    pub fn distance(self) -> N {
        self.dot(self).sqrt()
    }

    /// The point on the unit sphere in the same direction as this point.
    pub fn normalized(self) -> Result<Self, DegenerateDirection> {
        let distance = self.distance();
        if distance == N::zero() {
            Err(DegenerateDirection)
        } else {
            Ok(self / distance)
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    #[must_use]
    pub fn abs(self) -> Self {
        self.map(num::Float::abs)
    }

    /// Round every coordinate to the given number of decimal digits.
    #[must_use]
    pub fn round(self, digits: i32) -> Self {
        let scale = num::cast::<f64, N>(10.0)
            .map(|ten| ten.powi(digits))
            .unwrap_or_else(N::one);
        self.map(|c| (c * scale).round() / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(-4.0, 0.5, 2.0);

        assert_eq!(-a, Point::new(-1.0, -2.0, -3.0));
        assert_eq!(a + b, Point::new(-3.0, 2.5, 5.0));
        assert_eq!(a - b, Point::new(5.0, 1.5, 1.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0, 6.0));
        assert_eq!(a - b, a + (-b));
        assert_eq!(a.dot(b), -4.0 + 1.0 + 6.0);
    }

    #[test]
    fn test_point_equality_is_exact() {
        assert_ne!(Point::new(0.1 + 0.2, 0.0, 0.0), Point::new(0.3, 0.0, 0.0));
        assert_eq!(
            Point::new(0.1 + 0.2, 0.0, 0.0).round(6),
            Point::new(0.3, 0.0, 0.0)
        );
    }

    #[test]
    fn test_point_normalized() {
        let p = Point::new(0.0, 0.0, 2.0);
        assert_eq!(p.distance(), 2.0);
        assert_eq!(p.normalized(), Ok(Point::new(0.0, 0.0, 1.0)));

        let n = Point::<f64>::new(1.0, 1.0, 1.0).normalized().unwrap();
        assert!((n.distance() - 1.0).abs() < 1e-12);

        assert_eq!(Point::<f64>::origin().normalized(), Err(DegenerateDirection));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -2.0, 0.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Point::new(0.0, 0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_abs() {
        assert_eq!(
            Point::new(-1.5, 0.0, 2.0).abs(),
            Point::new(1.5, 0.0, 2.0)
        );
    }
}
