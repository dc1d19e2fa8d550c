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
    geometry::{
        point::Point,
        segment::{Segment, Segment2},
        triangle::Triangle2,
        vector::{Vector, VectorOps},
    },
    kernel::Relation,
    numeric::scalar::Scalar,
};

pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>) -> bool {
    p1.approx_eq(p2)
}

/// Three points on one line. Coincident points are collinear with anything.
pub fn are_collinear<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> bool
where
    Vector<T, N>: VectorOps<T, N>,
{
    a.vector_to(b).is_parallel(&a.vector_to(c))
}

/// `p` is within one tolerance of the segment. The foot of the
/// perpendicular may overshoot either end by at most that distance.
pub fn segment_contains_point<T: Scalar, const N: usize>(s: &Segment<T, N>, p: &Point<T, N>) -> bool {
    if s.direction().is_null() {
        return s.origin().approx_eq(p);
    }
    let t = s.closest_parameter(p);
    s.contains_parameter(t) && s.point_at(t).vector_to(p).is_null()
}

/// Overlap of two segments known to share a supporting line.
pub fn collinear_segments_overlap<T: Scalar, const N: usize>(c1: &Segment<T, N>, c2: &Segment<T, N>) -> bool {
    segment_contains_point(c1, c2.origin())
        || segment_contains_point(c1, &c2.end())
        || segment_contains_point(c2, c1.origin())
}

pub fn lines_relation_2d<T: Scalar>(c1: &Segment2<T>, c2: &Segment2<T>) -> Relation {
    if !c1.direction().is_parallel(c2.direction()) {
        return Relation::Common;
    }
    let between = c1.origin().vector_to(c2.origin());
    if !c1.direction().is_parallel(&between) {
        return Relation::Parallel;
    }
    Relation::Match
}

pub fn segments_intersect_2d<T: Scalar>(c1: &Segment2<T>, c2: &Segment2<T>) -> bool {
    match (c1.direction().is_null(), c2.direction().is_null()) {
        (true, true) => return c1.origin().approx_eq(c2.origin()),
        (true, false) => return segment_contains_point(c2, c1.origin()),
        (false, true) => return segment_contains_point(c1, c2.origin()),
        (false, false) => {}
    }

    match lines_relation_2d(c1, c2) {
        Relation::Parallel => false,
        Relation::Match => collinear_segments_overlap(c1, c2),
        Relation::Common => {
            let v1 = c1.direction();
            let v2 = c2.direction();
            let w = c2.origin().vector_to(c1.origin());
            let denom = v2.cross(v1);
            let a = w.cross(v2) / denom;
            let b = w.cross(v1) / denom;
            c1.contains_parameter(a) && c2.contains_parameter(b)
        }
    }
}

pub fn segment_intersects_triangle_2d<T: Scalar>(t: &Triangle2<T>, c: &Segment2<T>) -> bool {
    if t.contains(c.origin()) || t.contains(&c.end()) {
        return true;
    }
    // A segment crossing the triangle with both ends outside crosses two
    // edges, and at least one of them touches the first vertex.
    segments_intersect_2d(c, &t.edge(0, 1)) || segments_intersect_2d(c, &t.edge(0, 2))
}

pub fn triangles_intersect_2d<T: Scalar>(t1: &Triangle2<T>, t2: &Triangle2<T>) -> bool {
    if t2.points().iter().any(|p| t1.contains(p)) {
        return true;
    }
    if t1.points().iter().any(|p| t2.contains(p)) {
        return true;
    }

    let edges1 = [t1.edge(0, 1), t1.edge(0, 2)];
    let edges2 = [t2.edge(0, 1), t2.edge(0, 2)];
    edges1
        .iter()
        .any(|e1| edges2.iter().any(|e2| segments_intersect_2d(e1, e2)))
}
