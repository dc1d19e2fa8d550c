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
        intersection::{segment_intersects_triangle_on_plane, triangle_point, triangles_intersect_on_plane},
        point::Point3,
        segment::Segment3,
        triangle::Triangle3,
    },
    kernel::Side,
    numeric::scalar::Scalar,
};

fn strictly_one_side(sides: &[Side; 3]) -> bool {
    sides[0] != Side::On && sides.iter().all(|s| *s == sides[0])
}

/// Returns true if the two triangles share at least one point, boundaries
/// included.
///
/// Coplanar triangles are compared in 2D, parallel ones are rejected by their
/// vertex sides. Otherwise the part of `t2` lying in the plane of `t1` (a
/// single vertex or a chord) is tested against `t1`.
pub fn tri_tri_intersect<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    let pl1 = t1.plane();
    let pl2 = t2.plane();

    // Vertex sides decide rather than the plane relation: normals within the
    // angular tolerance still drift apart over a large triangle.
    let q = *t2.points();
    let s2 = q.map(|p| pl1.side_of(&p));
    if s2.iter().all(|s| *s == Side::On) {
        return triangles_intersect_on_plane(t1, t2);
    }
    if strictly_one_side(&s2) {
        return false;
    }
    let s1 = (*t1.points()).map(|p| pl2.side_of(&p));
    if strictly_one_side(&s1) {
        return false;
    }

    // Intersection of t2 with the plane of t1: on-plane vertices are taken
    // as is, edges with strictly opposite ends contribute their crossing.
    let mut pts = [Point3::<T>::default(); 3];
    let mut count = 0;
    for i in 0..3 {
        if s2[i] == Side::On {
            pts[count] = q[i];
            count += 1;
        }
    }
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        if count < 3 && s2[i].is_opposite(s2[j]) {
            if let Some(p) = pl1.edge_crossing(&q[i], &q[j]) {
                pts[count] = p;
                count += 1;
            }
        }
    }

    match count {
        0 => false,
        1 => triangle_point(t1, &pts[0]),
        2 => match Segment3::new(&pts[0], &pts[1]) {
            Ok(chord) => segment_intersects_triangle_on_plane(t1, &chord),
            Err(_) => triangle_point(t1, &pts[0]),
        },
        _ => triangles_intersect_on_plane(t1, t2),
    }
}
