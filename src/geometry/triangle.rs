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
        plane::Plane,
        point::{Point2, Point3},
        segment::Segment2,
        vector::VectorOps,
    },
    numeric::scalar::Scalar,
};

/// Proper 3D triangle together with its supporting plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3<T: Scalar> {
    points: [Point3<T>; 3],
    plane: Plane<T>,
}

impl<T: Scalar> Triangle3<T> {
    pub fn new(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> IntersectResult<Self> {
        if p1.approx_eq(p2) || p2.approx_eq(p3) || p1.approx_eq(p3) {
            return Err(IntersectError::degenerate(format!(
                "triangle has coincident vertices: {:?}, {:?}, {:?}",
                p1.coords, p2.coords, p3.coords
            )));
        }
        let plane = Plane::from_points(p1, p2, p3)?;
        Ok(Triangle3 {
            points: [*p1, *p2, *p3],
            plane,
        })
    }

    pub fn p1(&self) -> &Point3<T> {
        &self.points[0]
    }

    pub fn p2(&self) -> &Point3<T> {
        &self.points[1]
    }

    pub fn p3(&self) -> &Point3<T> {
        &self.points[2]
    }

    pub fn points(&self) -> &[Point3<T>; 3] {
        &self.points
    }

    pub fn plane(&self) -> &Plane<T> {
        &self.plane
    }

    pub fn project(&self, i0: usize, i1: usize) -> Triangle2<T> {
        Triangle2::new(
            self.points[0].project(i0, i1),
            self.points[1].project(i0, i1),
            self.points[2].project(i0, i1),
        )
    }
}

/// 2D triangle obtained by projecting a 3D one. Not validated: a projection
/// of a proper triangle may fall under the tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle2<T: Scalar> {
    points: [Point2<T>; 3],
}

impl<T: Scalar> Triangle2<T> {
    pub fn new(p1: Point2<T>, p2: Point2<T>, p3: Point2<T>) -> Self {
        Triangle2 {
            points: [p1, p2, p3],
        }
    }

    pub fn p1(&self) -> &Point2<T> {
        &self.points[0]
    }

    pub fn p2(&self) -> &Point2<T> {
        &self.points[1]
    }

    pub fn p3(&self) -> &Point2<T> {
        &self.points[2]
    }

    pub fn points(&self) -> &[Point2<T>; 3] {
        &self.points
    }

    pub fn edge(&self, i: usize, j: usize) -> Segment2<T> {
        Segment2::from_parts(self.points[i], self.points[i].vector_to(&self.points[j]))
    }

    /// Boundary-inclusive containment: `p` is rejected only if its signed
    /// distances to two edge lines have strictly opposite signs. A distance
    /// within the tolerance counts as zero.
    pub fn contains(&self, p: &Point2<T>) -> bool {
        let side = |i: usize| {
            let a = &self.points[i];
            let edge = a.vector_to(&self.points[(i + 1) % 3]);
            let len = edge.norm();
            if len.is_zero() {
                return 0;
            }
            (edge.cross(&a.vector_to(p)) / len).sign()
        };
        let s = [side(0), side(1), side(2)];
        !(s.contains(&1) && s.contains(&-1))
    }
}
