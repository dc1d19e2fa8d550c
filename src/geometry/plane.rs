// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{
    error::{IntersectError, IntersectResult},
    geometry::{
        point::Point3,
        segment::Segment3,
        triangle::Triangle3,
        vector::{Vector3, VectorOps},
    },
    kernel::{Relation, Side},
    numeric::scalar::Scalar,
};

/// Plane `A·x + B·y + C·z + D = 0` with a unit normal `(A, B, C)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<T: Scalar> {
    normal: Vector3<T>,
    d: T,
}

impl<T: Scalar> Plane<T> {
    /// Plane through three points, normal = normalized `(p2 - p1) x (p3 - p1)`.
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> IntersectResult<Self> {
        let v1 = p1.vector_to(p2);
        let v2 = p1.vector_to(p3);
        let n = v1.cross(&v2);
        if n.is_null() {
            return Err(IntersectError::degenerate(format!(
                "plane points are collinear: {:?}, {:?}, {:?}",
                p1.coords, p2.coords, p3.coords
            )));
        }
        let normal = n.normalized();
        let d = -(normal.x() * p1.x() + normal.y() * p1.y() + normal.z() * p1.z());
        Ok(Plane { normal, d })
    }

    pub fn a(&self) -> T {
        self.normal.x()
    }

    pub fn b(&self) -> T {
        self.normal.y()
    }

    pub fn c(&self) -> T {
        self.normal.z()
    }

    pub fn d(&self) -> T {
        self.d
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        self.a() * p.x() + self.b() * p.y() + self.c() * p.z() + self.d
    }

    pub fn side_of(&self, p: &Point3<T>) -> Side {
        Side::from_sign(self.signed_distance(p).sign())
    }

    /// Combined side of a point set: strictly one side only if every point
    /// is strictly on that side, otherwise [`Side::On`].
    pub fn side_of_points(&self, points: &[Point3<T>]) -> Side {
        let mut sides = points.iter().map(|p| self.side_of(p));
        let Some(first) = sides.next() else {
            return Side::On;
        };
        if first != Side::On && sides.all(|s| s == first) {
            first
        } else {
            Side::On
        }
    }

    pub fn segment_side(&self, s: &Segment3<T>) -> Side {
        self.side_of_points(&[*s.origin(), s.end()])
    }

    pub fn triangle_side(&self, t: &Triangle3<T>) -> Side {
        self.side_of_points(t.points())
    }

    pub fn contains_point(&self, p: &Point3<T>) -> bool {
        self.signed_distance(p).is_approx_zero()
    }

    /// True if `v` has no component along the normal. Null vectors are
    /// parallel to every plane.
    pub fn is_parallel_to(&self, v: &Vector3<T>) -> bool {
        if v.is_null() {
            return true;
        }
        self.normal.dot(&v.normalized()).is_approx_zero()
    }

    pub fn relation(&self, other: &Plane<T>) -> Relation {
        if !self.normal.is_parallel(&other.normal) {
            return Relation::Common;
        }
        // Anti-parallel normals describe the same plane with D negated.
        let other_d = if self.normal.dot(&other.normal) < T::zero() {
            -other.d
        } else {
            other.d
        };
        if self.d.approx_eq(&other_d) {
            Relation::Match
        } else {
            Relation::Parallel
        }
    }

    /// Relation of the segment's supporting line to this plane.
    pub fn segment_relation(&self, s: &Segment3<T>) -> Relation {
        if !self.is_parallel_to(s.direction()) {
            return Relation::Common;
        }
        if self.contains_point(s.origin()) {
            Relation::Match
        } else {
            Relation::Parallel
        }
    }

    /// Intersection of the segment's infinite line with the plane.
    ///
    /// A line lying in the plane yields its origin; a parallel line off the
    /// plane yields `None`.
    pub fn line_intersection(&self, s: &Segment3<T>) -> Option<Point3<T>> {
        match self.segment_relation(s) {
            Relation::Parallel => None,
            Relation::Match => Some(*s.origin()),
            Relation::Common => {
                let k = self.normal.dot(s.direction());
                let t = -self.signed_distance(s.origin()) / k;
                Some(s.point_at(t))
            }
        }
    }

    /// Point where edge `[a, b]` crosses the plane, interpolated from the
    /// signed distances of its endpoints. `None` unless the endpoints are
    /// strictly on opposite sides.
    pub fn edge_crossing(&self, a: &Point3<T>, b: &Point3<T>) -> Option<Point3<T>> {
        let da = self.signed_distance(a);
        let db = self.signed_distance(b);
        if da.sign() * db.sign() >= 0 {
            return None;
        }
        let t = da / (da - db);
        Some(a.add_vector(&a.vector_to(b).scale(t)))
    }
}
