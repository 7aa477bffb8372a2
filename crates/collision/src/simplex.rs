use std::ops::Deref;

use arrayvec::ArrayVec;
use convex_math::{DegenerateDirection, Point, Vector, triple_product};

/// Either the empty set, a single point, a line, a triangle or a tetrahedron whose vertices lie
/// on the boundary of a support mapping. Points are kept in insertion order, oldest first.
#[derive(Debug, Clone)]
pub struct Simplex<N>(ArrayVec<Point<N>, 4>);

/// The result of evolving a simplex towards the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Evolution<N> {
    /// The origin lies on the simplex, or inside the region it spans.
    ContainsOrigin,
    /// The origin is not enclosed yet. The simplex has been reduced to the points that can still
    /// contribute to enclosing it, and the next support point should be searched for in the
    /// given normalized direction. Every remaining point lies strictly behind the origin along
    /// this direction.
    Search(Point<N>),
}

impl<N> Default for Simplex<N> {
    fn default() -> Self {
        Self(ArrayVec::new())
    }
}

impl<N> Deref for Simplex<N> {
    type Target = [Point<N>];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl<N: num::Float> Simplex<N> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn point(p: Point<N>) -> Self {
        Self(ArrayVec::from_iter([p]))
    }

    /// Add a point at the end of the simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex already holds 4 points.
    pub fn push(&mut self, point: Point<N>) {
        self.0.push(point);
    }

    /// Examine the line, triangle or tetrahedron formed by the simplex.
    ///
    /// If the origin is contained, the simplex is left unchanged. Otherwise the points which
    /// cannot contribute to enclosing the origin are dropped, and the direction towards the
    /// origin from what remains is returned.
    ///
    /// # Panics
    ///
    /// Panics if the simplex has fewer than 2 points.
    pub fn evolve(&mut self) -> Result<Evolution<N>, DegenerateDirection> {
        match self.len() {
            2 => self.line_case(),
            3 => self.triangle_case(),
            4 => self.tetrahedron_case(),
            len => unreachable!("cannot evolve a simplex of {len} points"),
        }
    }

    fn line_case(&self) -> Result<Evolution<N>, DegenerateDirection> {
        let [b, a] = [self[0], self[1]];
        let ba = Vector::new(b, a);
        let bo = Vector::new(b, Point::origin());

        // `a`, `b` and the origin are collinear, so the origin is on the line.
        if ba.cross(bo).is_degenerate() {
            return Ok(Evolution::ContainsOrigin);
        }

        Ok(Evolution::Search(towards_origin(b, a)?))
    }

    fn triangle_case(&mut self) -> Result<Evolution<N>, DegenerateDirection> {
        let [a, b, c] = [self[0], self[1], self[2]];
        let cb = Vector::new(c, b);
        let ca = Vector::new(c, a);
        let co = Vector::new(c, Point::origin());

        // Perpendiculars to each edge within the triangle's plane, pointing away from the
        // opposite vertex.
        let ca_perp = triple_product(cb, ca, ca);
        let cb_perp = triple_product(ca, cb, cb);

        // The `cb` edge must be checked first. A degenerate triangle passes both checks.
        if co.dot(cb_perp.arrow()) > N::zero() {
            self.0.remove(0);
            return Ok(Evolution::Search(towards_origin(b, c)?));
        }
        if co.dot(ca_perp.arrow()) > N::zero() {
            self.0.remove(1);
            return Ok(Evolution::Search(towards_origin(a, c)?));
        }

        // The origin projects onto the triangle. Unless it is in the triangle's plane, search
        // along the normal on the origin's side.
        let normal = cb.cross(ca).arrow();
        let height = co.dot(normal);
        if height == N::zero() {
            Ok(Evolution::ContainsOrigin)
        } else {
            Ok(Evolution::Search((normal * height.signum()).normalized()?))
        }
    }

    // The newest point `d` was found searching from the triangle `abc` towards the origin, so
    // the origin is already known to be on the same side of `abc` as `d`.
    fn tetrahedron_case(&mut self) -> Result<Evolution<N>, DegenerateDirection> {
        let [a, b, c, d] = [self[0], self[1], self[2], self[3]];
        let dout = Vector::new(d, Point::origin());

        for (x, y, opposite, index) in [(a, b, c, 2), (b, c, a, 0), (c, a, b, 1)] {
            let normal = Vector::new(d, x).cross(Vector::new(d, y)).arrow();
            let inside = Vector::new(d, opposite).dot(normal);
            let origin = dout.dot(normal);

            let outside = if inside > N::zero() {
                origin < N::zero()
            } else {
                origin > N::zero()
            };

            if outside {
                self.0.remove(index);
                return self.triangle_case();
            }
        }

        Ok(Evolution::ContainsOrigin)
    }
}

/// The direction from the line through `p` and `q` towards the origin.
fn towards_origin<N: num::Float>(
    p: Point<N>,
    q: Point<N>,
) -> Result<Point<N>, DegenerateDirection> {
    let pq = Vector::new(p, q);
    triple_product(pq, Vector::new(p, Point::origin()), pq).direction()
}
