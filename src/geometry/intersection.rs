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

//! Pairwise intersection tests between points, segments and triangles.
//!
//! Every test is a pure boolean predicate. Symmetry is guaranteed by the
//! [`Intersects`] impls: mixed-kind pairs are routed to one canonical
//! function, same-kind pairs are ordered by their coordinates first.

use std::cmp::Ordering;

use crate::{
    geometry::{
        plane::Plane,
        point::Point3,
        segment::Segment3,
        tri_tri_intersect::tri_tri_intersect,
        triangle::Triangle3,
        vector::VectorOps,
    },
    kernel::{
        Relation, Side, are_collinear, collinear_segments_overlap, coplanar_axes, segment_contains_point,
        segment_intersects_triangle_2d, segments_intersect_2d, triangles_intersect_2d,
    },
    numeric::scalar::Scalar,
};

/// Symmetric intersection test. `a.intersects(&b) == b.intersects(&a)`.
pub trait Intersects<Rhs: ?Sized = Self> {
    fn intersects(&self, other: &Rhs) -> bool;
}

pub fn check_intersection<A, B>(a: &A, b: &B) -> bool
where
    A: Intersects<B>,
{
    a.intersects(b)
}

/// Segment lying in the triangle's plane, tested in the triangle's best 2D
/// projection.
pub(crate) fn segment_intersects_triangle_on_plane<T: Scalar>(t: &Triangle3<T>, s: &Segment3<T>) -> bool {
    let (i0, i1, _) = coplanar_axes(t.plane().normal());
    segment_intersects_triangle_2d(&t.project(i0, i1), &s.project(i0, i1))
}

/// Coplanar triangles, both projected with the axes of `t1`'s plane.
pub(crate) fn triangles_intersect_on_plane<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    let (i0, i1, _) = coplanar_axes(t1.plane().normal());
    triangles_intersect_2d(&t1.project(i0, i1), &t2.project(i0, i1))
}

/// Point on the triangle's plane and on the inner side of all three edges.
/// Each edge cross product is taken along the plane normal and divided by
/// the edge length, which gives the in-plane distance from the edge line.
pub fn triangle_point<T: Scalar>(t: &Triangle3<T>, p: &Point3<T>) -> bool {
    let plane = t.plane();
    if !plane.contains_point(p) {
        return false;
    }

    let n = plane.normal();
    let pts = t.points();
    let side = |i: usize| {
        let a = &pts[i];
        let edge = a.vector_to(&pts[(i + 1) % 3]);
        (edge.cross(&a.vector_to(p)).dot(n) / edge.norm()).sign()
    };
    let s = [side(0), side(1), side(2)];
    !(s.contains(&1) && s.contains(&-1))
}

pub fn triangle_segment<T: Scalar>(t: &Triangle3<T>, s: &Segment3<T>) -> bool {
    let plane = t.plane();
    if plane.contains_point(s.origin()) && plane.contains_point(&s.end()) {
        return segment_intersects_triangle_on_plane(t, s);
    }

    match plane.segment_relation(s) {
        // Parallel within the angular tolerance; a long segment can still
        // reach the plane, so its ends decide.
        Relation::Parallel | Relation::Match => {
            let (a, b) = (*s.origin(), s.end());
            match (plane.side_of(&a), plane.side_of(&b)) {
                (Side::On, _) => triangle_point(t, &a),
                (_, Side::On) => triangle_point(t, &b),
                _ => plane.edge_crossing(&a, &b).is_some_and(|p| triangle_point(t, &p)),
            }
        }
        Relation::Common => {
            let Some(p) = plane.line_intersection(s) else {
                return false;
            };
            if !s.contains_parameter(s.parameter_of(&p)) {
                return false;
            }
            triangle_point(t, &p)
        }
    }
}

pub fn triangle_triangle<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    tri_tri_intersect(t1, t2)
}

pub fn segment_segment<T: Scalar>(c1: &Segment3<T>, c2: &Segment3<T>) -> bool {
    let a = c1.origin();
    let b = c1.end();
    if are_collinear(a, &b, c2.origin()) {
        return collinear_segments_overlap(c1, c2);
    }

    let plane = match Plane::from_points(a, &b, c2.origin()) {
        Ok(plane) => plane,
        Err(_) => return collinear_segments_overlap(c1, c2),
    };
    if !plane.contains_point(&c2.end()) {
        return false;
    }

    let (i0, i1, _) = coplanar_axes(plane.normal());
    segments_intersect_2d(&c1.project(i0, i1), &c2.project(i0, i1))
}

pub fn segment_point<T: Scalar>(s: &Segment3<T>, p: &Point3<T>) -> bool {
    segment_contains_point(s, p)
}

pub fn point_point<T: Scalar>(p1: &Point3<T>, p2: &Point3<T>) -> bool {
    p1.approx_eq(p2)
}

fn points_cmp<T: Scalar>(a: &[Point3<T>], b: &[Point3<T>]) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| p.total_cmp(q))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

impl<T: Scalar> Intersects for Triangle3<T> {
    fn intersects(&self, other: &Triangle3<T>) -> bool {
        if points_cmp(self.points(), other.points()) == Ordering::Greater {
            triangle_triangle(other, self)
        } else {
            triangle_triangle(self, other)
        }
    }
}

impl<T: Scalar> Intersects<Segment3<T>> for Triangle3<T> {
    fn intersects(&self, other: &Segment3<T>) -> bool {
        triangle_segment(self, other)
    }
}

impl<T: Scalar> Intersects<Point3<T>> for Triangle3<T> {
    fn intersects(&self, other: &Point3<T>) -> bool {
        triangle_point(self, other)
    }
}

impl<T: Scalar> Intersects<Triangle3<T>> for Segment3<T> {
    fn intersects(&self, other: &Triangle3<T>) -> bool {
        triangle_segment(other, self)
    }
}

impl<T: Scalar> Intersects for Segment3<T> {
    fn intersects(&self, other: &Segment3<T>) -> bool {
        let ends_a = [*self.origin(), self.end()];
        let ends_b = [*other.origin(), other.end()];
        if points_cmp(&ends_a, &ends_b) == Ordering::Greater {
            segment_segment(other, self)
        } else {
            segment_segment(self, other)
        }
    }
}

impl<T: Scalar> Intersects<Point3<T>> for Segment3<T> {
    fn intersects(&self, other: &Point3<T>) -> bool {
        segment_point(self, other)
    }
}

impl<T: Scalar> Intersects<Triangle3<T>> for Point3<T> {
    fn intersects(&self, other: &Triangle3<T>) -> bool {
        triangle_point(other, self)
    }
}

impl<T: Scalar> Intersects<Segment3<T>> for Point3<T> {
    fn intersects(&self, other: &Segment3<T>) -> bool {
        segment_point(other, self)
    }
}

impl<T: Scalar> Intersects for Point3<T> {
    fn intersects(&self, other: &Point3<T>) -> bool {
        point_point(self, other)
    }
}
