use std::fmt;

use convex_math::Point;
use thiserror::Error;

use crate::support::SupportMap;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Dimension {
    Height,
    Width,
    Depth,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Height => "height",
            Dimension::Width => "width",
            Dimension::Depth => "depth",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum ShapeError {
    #[error("radius must be a non-negative number")]
    NegativeRadius,
    #[error("radius must be finite")]
    NonFiniteRadius,
    #[error("{0} must be a non-negative number")]
    NegativeDimension(Dimension),
    #[error("{0} must be finite")]
    NonFiniteDimension(Dimension),
    #[error("center must have finite coordinates")]
    NonFiniteCenter,
    #[error("disk normal must be finite and have a non-zero length")]
    DegenerateNormal,
}

fn check_center<N: num::Float>(center: Point<N>) -> Result<Point<N>, ShapeError> {
    if center.is_finite() {
        Ok(center)
    } else {
        Err(ShapeError::NonFiniteCenter)
    }
}

fn check_radius<N: num::Float>(radius: N) -> Result<N, ShapeError> {
    if !radius.is_finite() {
        Err(ShapeError::NonFiniteRadius)
    } else if radius < N::zero() {
        Err(ShapeError::NegativeRadius)
    } else {
        Ok(radius)
    }
}

fn check_normal<N: num::Float>(normal: Point<N>) -> Result<Point<N>, ShapeError> {
    if !normal.is_finite() {
        return Err(ShapeError::DegenerateNormal);
    }
    normal
        .normalized()
        .map_err(|_| ShapeError::DegenerateNormal)
}

fn check_dims<N: num::Float>(dims: [N; 3]) -> Result<[N; 3], ShapeError> {
    for (dim, which) in dims
        .into_iter()
        .zip([Dimension::Height, Dimension::Width, Dimension::Depth])
    {
        if !dim.is_finite() {
            return Err(ShapeError::NonFiniteDimension(which));
        } else if dim < N::zero() {
            return Err(ShapeError::NegativeDimension(which));
        }
    }
    Ok(dims)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere<N> {
    center: Point<N>,
    radius: N,
}

impl<N: num::Float> Sphere<N> {
    pub fn new(center: Point<N>, radius: N) -> Result<Self, ShapeError> {
        Ok(Self {
            center: check_center(center)?,
            radius: check_radius(radius)?,
        })
    }

    pub fn radius(&self) -> N {
        self.radius
    }

    pub fn set_radius(&mut self, radius: N) -> Result<(), ShapeError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    pub fn set_center(&mut self, center: Point<N>) -> Result<(), ShapeError> {
        self.center = check_center(center)?;
        Ok(())
    }
}

impl<N: num::Float> SupportMap<N> for Sphere<N> {
    fn support(&self, ndir: Point<N>) -> Point<N> {
        self.center + ndir * self.radius
    }

    fn center(&self) -> Point<N> {
        self.center
    }
}

/// A flat circle in 3-space, oriented by its unit normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disk<N> {
    center: Point<N>,
    radius: N,
    normal: Point<N>,
}

impl<N: num::Float> Disk<N> {
    /// The given normal does not need to be normalized, but it must have a non-zero length.
    pub fn new(center: Point<N>, radius: N, normal: Point<N>) -> Result<Self, ShapeError> {
        Ok(Self {
            center: check_center(center)?,
            radius: check_radius(radius)?,
            normal: check_normal(normal)?,
        })
    }

    pub fn radius(&self) -> N {
        self.radius
    }

    pub fn normal(&self) -> Point<N> {
        self.normal
    }

    pub fn set_radius(&mut self, radius: N) -> Result<(), ShapeError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    pub fn set_normal(&mut self, normal: Point<N>) -> Result<(), ShapeError> {
        self.normal = check_normal(normal)?;
        Ok(())
    }

    pub fn set_center(&mut self, center: Point<N>) -> Result<(), ShapeError> {
        self.center = check_center(center)?;
        Ok(())
    }
}

impl<N: num::Float> SupportMap<N> for Disk<N> {
    fn support(&self, ndir: Point<N>) -> Point<N> {
        let in_plane = ndir - self.normal * self.normal.dot(ndir);
        match in_plane.normalized() {
            Ok(dir) => self.center + dir * self.radius,
            // Looking straight down the normal, every point of the disk is extremal.
            Err(_) => self.center,
        }
    }

    fn center(&self) -> Point<N> {
        self.center
    }
}

/// An axis aligned box. Height spans the x axis, width the y axis and depth the z axis.
///
/// The 8 corners are computed on construction and on every change, and support queries are a
/// lookup into this corner table. Corner `i` is on the negative x side if bit 0 of `i` is set,
/// the negative y side for bit 1 and the negative z side for bit 2.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cuboid<N> {
    center: Point<N>,
    dims: [N; 3],
    corners: [Point<N>; 8],
}

impl<N: num::Float> Cuboid<N> {
    pub fn new(center: Point<N>, height: N, width: N, depth: N) -> Result<Self, ShapeError> {
        let center = check_center(center)?;
        let dims = check_dims([height, width, depth])?;
        Ok(Self {
            center,
            dims,
            corners: Self::calc_corners(center, dims),
        })
    }

    /// The full extents of the cuboid as `[height, width, depth]`.
    pub fn dims(&self) -> [N; 3] {
        self.dims
    }

    pub fn corners(&self) -> &[Point<N>; 8] {
        &self.corners
    }

    pub fn set_dims(&mut self, height: N, width: N, depth: N) -> Result<(), ShapeError> {
        self.dims = check_dims([height, width, depth])?;
        self.corners = Self::calc_corners(self.center, self.dims);
        Ok(())
    }

    pub fn set_center(&mut self, center: Point<N>) -> Result<(), ShapeError> {
        self.center = check_center(center)?;
        self.corners = Self::calc_corners(self.center, self.dims);
        Ok(())
    }

    fn calc_corners(center: Point<N>, dims: [N; 3]) -> [Point<N>; 8] {
        let two = N::one() + N::one();
        let half = Point::from(dims.map(|d| d / two));
        std::array::from_fn(|i| {
            let side = |axis: usize| {
                if i & (1 << axis) == 0 {
                    half[axis]
                } else {
                    -half[axis]
                }
            };
            center + Point::new(side(0), side(1), side(2))
        })
    }
}

impl<N: num::Float> SupportMap<N> for Cuboid<N> {
    fn support(&self, ndir: Point<N>) -> Point<N> {
        let mut i = 0;
        for axis in 0..3 {
            if !(ndir[axis] > N::zero()) {
                i |= 1 << axis;
            }
        }
        self.corners[i]
    }

    fn center(&self) -> Point<N> {
        self.center
    }
}

/// Any one of the built-in convex shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<N> {
    Sphere(Sphere<N>),
    Disk(Disk<N>),
    Cuboid(Cuboid<N>),
}

impl<N> From<Sphere<N>> for Shape<N> {
    fn from(s: Sphere<N>) -> Self {
        Self::Sphere(s)
    }
}

impl<N> From<Disk<N>> for Shape<N> {
    fn from(d: Disk<N>) -> Self {
        Self::Disk(d)
    }
}

impl<N> From<Cuboid<N>> for Shape<N> {
    fn from(c: Cuboid<N>) -> Self {
        Self::Cuboid(c)
    }
}

impl<N: num::Float> SupportMap<N> for Shape<N> {
    fn support(&self, ndir: Point<N>) -> Point<N> {
        match self {
            Shape::Sphere(s) => s.support(ndir),
            Shape::Disk(d) => d.support(ndir),
            Shape::Cuboid(c) => c.support(ndir),
        }
    }

    fn center(&self) -> Point<N> {
        match self {
            Shape::Sphere(s) => s.center(),
            Shape::Disk(d) => d.center(),
            Shape::Cuboid(c) => c.center(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Point<f64> {
        Point::new(1.0, 1.0, 1.0).normalized().unwrap()
    }

    fn assert_near(a: Point<f64>, b: Point<f64>) {
        assert!((a - b).distance() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn test_sphere_support() {
        let sphere = Sphere::new(Point::origin(), 3.0).unwrap();
        assert_near(
            sphere.support(diagonal()),
            Point::new(1.73205080756887, 1.73205080756887, 1.73205080756887),
        );

        let offset = Sphere::new(Point::new(1.0, 2.0, 3.0), 2.0).unwrap();
        assert_eq!(
            offset.support(Point::new(0.0, -1.0, 0.0)),
            Point::new(1.0, 0.0, 3.0)
        );
    }

    #[test]
    fn test_sphere_radius_validation() {
        assert_eq!(
            Sphere::new(Point::origin(), -1.0),
            Err(ShapeError::NegativeRadius)
        );
        assert_eq!(
            Sphere::new(Point::origin(), f64::NAN),
            Err(ShapeError::NonFiniteRadius)
        );
        assert_eq!(
            Sphere::new(Point::origin(), f64::INFINITY),
            Err(ShapeError::NonFiniteRadius)
        );

        let mut sphere = Sphere::new(Point::origin(), 3.0).unwrap();
        assert_eq!(sphere.set_radius(-1.0), Err(ShapeError::NegativeRadius));
        assert_eq!(sphere.set_radius(f64::INFINITY), Err(ShapeError::NonFiniteRadius));
        assert_eq!(sphere.radius(), 3.0);
        sphere.set_radius(0.0).unwrap();
        assert_eq!(sphere.support(diagonal()), Point::origin());
    }

    #[test]
    fn test_disk_normalizes_normal() {
        let disk = Disk::new(Point::origin(), 3.0, Point::new(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(disk.normal(), Point::new(0.0, 0.0, 1.0));

        assert_eq!(
            Disk::new(Point::origin(), 3.0, Point::origin()),
            Err(ShapeError::DegenerateNormal)
        );
    }

    #[test]
    fn test_disk_support() {
        let mut disk = Disk::new(Point::origin(), 3.0, Point::new(0.0, 0.0, 2.0)).unwrap();
        assert_near(
            disk.support(diagonal()),
            Point::new(2.1213203435596424, 2.1213203435596424, 0.0),
        );

        // Face on, the center is as far along the normal as any other point.
        assert_eq!(disk.support(Point::new(0.0, 0.0, 1.0)), Point::origin());
        assert_eq!(disk.support(Point::new(0.0, 0.0, -1.0)), Point::origin());

        assert_eq!(disk.set_radius(-1.0), Err(ShapeError::NegativeRadius));
        disk.set_center(Point::new(0.0, 0.0, 5.0)).unwrap();
        disk.set_normal(Point::new(1.0, 0.0, 0.0)).unwrap();
        assert_near(
            disk.support(Point::new(0.0, 1.0, 0.0)),
            Point::new(0.0, 3.0, 5.0),
        );
    }

    #[test]
    fn test_cuboid_corners() {
        let cuboid = Cuboid::new(Point::origin(), 3.0, 3.0, 6.0).unwrap();
        assert_eq!(
            cuboid.corners(),
            &[
                Point::new(1.5, 1.5, 3.0),
                Point::new(-1.5, 1.5, 3.0),
                Point::new(1.5, -1.5, 3.0),
                Point::new(-1.5, -1.5, 3.0),
                Point::new(1.5, 1.5, -3.0),
                Point::new(-1.5, 1.5, -3.0),
                Point::new(1.5, -1.5, -3.0),
                Point::new(-1.5, -1.5, -3.0),
            ]
        );
    }

    #[test]
    fn test_cuboid_support() {
        let cuboid = Cuboid::new(Point::origin(), 3.0, 3.0, 6.0).unwrap();
        assert_eq!(cuboid.support(diagonal()), Point::new(1.5, 1.5, 3.0));
        assert_eq!(
            cuboid.support(-diagonal()),
            Point::new(-1.5, -1.5, -3.0)
        );
        // A zero component selects the negative side.
        assert_eq!(
            cuboid.support(Point::new(1.0, 0.0, 0.0)),
            Point::new(1.5, -1.5, -3.0)
        );
    }

    #[test]
    fn test_cuboid_mutation() {
        let mut cuboid = Cuboid::new(Point::origin(), 3.0, 3.0, 6.0).unwrap();

        assert_eq!(
            cuboid.set_dims(-1.0, 0.0, 0.0),
            Err(ShapeError::NegativeDimension(Dimension::Height))
        );
        assert_eq!(
            cuboid.set_dims(0.0, -1.0, 0.0),
            Err(ShapeError::NegativeDimension(Dimension::Width))
        );
        assert_eq!(
            cuboid.set_dims(0.0, 0.0, -1.0),
            Err(ShapeError::NegativeDimension(Dimension::Depth))
        );
        assert_eq!(cuboid.dims(), [3.0, 3.0, 6.0]);

        cuboid.set_dims(1.0, 2.0, 3.0).unwrap();
        assert_eq!(
            cuboid.corners(),
            &[
                Point::new(0.5, 1.0, 1.5),
                Point::new(-0.5, 1.0, 1.5),
                Point::new(0.5, -1.0, 1.5),
                Point::new(-0.5, -1.0, 1.5),
                Point::new(0.5, 1.0, -1.5),
                Point::new(-0.5, 1.0, -1.5),
                Point::new(0.5, -1.0, -1.5),
                Point::new(-0.5, -1.0, -1.5),
            ]
        );

        cuboid.set_center(Point::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(
            cuboid.corners(),
            &[
                Point::new(1.5, 3.0, 4.5),
                Point::new(0.5, 3.0, 4.5),
                Point::new(1.5, 1.0, 4.5),
                Point::new(0.5, 1.0, 4.5),
                Point::new(1.5, 3.0, 1.5),
                Point::new(0.5, 3.0, 1.5),
                Point::new(1.5, 1.0, 1.5),
                Point::new(0.5, 1.0, 1.5),
            ]
        );
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let nan = Point::new(f64::NAN, 0.0, 0.0);
        let inf = Point::new(0.0, f64::NEG_INFINITY, 0.0);

        assert_eq!(Sphere::new(nan, 1.0), Err(ShapeError::NonFiniteCenter));
        assert_eq!(
            Disk::new(inf, 1.0, Point::new(0.0, 0.0, 1.0)),
            Err(ShapeError::NonFiniteCenter)
        );
        assert_eq!(
            Disk::new(Point::origin(), 1.0, nan),
            Err(ShapeError::DegenerateNormal)
        );
        assert_eq!(
            Cuboid::new(nan, 1.0, 1.0, 1.0),
            Err(ShapeError::NonFiniteCenter)
        );
        assert_eq!(
            Cuboid::new(Point::origin(), 1.0, f64::INFINITY, 1.0),
            Err(ShapeError::NonFiniteDimension(Dimension::Width))
        );
        assert_eq!(
            Cuboid::new(Point::origin(), 1.0, 1.0, f64::NAN),
            Err(ShapeError::NonFiniteDimension(Dimension::Depth))
        );

        let mut sphere = Sphere::new(Point::origin(), 1.0).unwrap();
        assert_eq!(sphere.set_center(nan), Err(ShapeError::NonFiniteCenter));
        assert_eq!(sphere.center(), Point::origin());

        let mut disk = Disk::new(Point::origin(), 1.0, Point::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(disk.set_center(inf), Err(ShapeError::NonFiniteCenter));
        assert_eq!(disk.set_normal(inf), Err(ShapeError::DegenerateNormal));
        assert_eq!(disk.normal(), Point::new(0.0, 0.0, 1.0));

        let mut cuboid = Cuboid::new(Point::origin(), 2.0, 2.0, 2.0).unwrap();
        let corners = *cuboid.corners();
        assert_eq!(cuboid.set_center(nan), Err(ShapeError::NonFiniteCenter));
        assert_eq!(cuboid.corners(), &corners);
    }

    #[test]
    fn test_shape_dispatch() {
        let shapes: [Shape<f64>; 3] = [
            Sphere::new(Point::new(1.0, 0.0, 0.0), 1.0).unwrap().into(),
            Disk::new(Point::new(1.0, 0.0, 0.0), 1.0, Point::new(0.0, 0.0, 1.0))
                .unwrap()
                .into(),
            Cuboid::new(Point::new(1.0, 0.0, 0.0), 2.0, 2.0, 2.0)
                .unwrap()
                .into(),
        ];

        for shape in &shapes {
            assert_eq!(shape.center(), Point::new(1.0, 0.0, 0.0));
            assert_eq!(shape.support(Point::new(1.0, 0.0, 0.0))[0], 2.0);
        }
    }
}
