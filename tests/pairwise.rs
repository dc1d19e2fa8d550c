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

use proptest::prelude::*;

use intersector::{
    Intersects, ObjectStorage, Point3, RawRecord, Segment3, Triangle3,
    geometry::{check_intersection, point_point, segment_segment},
};

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

fn seg(a: [f64; 3], b: [f64; 3]) -> Segment3<f64> {
    Segment3::new(&Point3::from(a), &Point3::from(b)).unwrap()
}

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle3<f64> {
    Triangle3::new(&Point3::from(a), &Point3::from(b), &Point3::from(c)).unwrap()
}

fn base_triangle() -> Triangle3<f64> {
    tri([0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0])
}

#[test]
fn test_point_point() {
    assert!(point_point(&p(1.0, 2.0, 3.0), &p(1.0, 2.0, 3.0 + 5e-7)));
    assert!(!point_point(&p(1.0, 2.0, 3.0), &p(1.0, 2.001, 3.0)));
}

#[test]
fn test_segment_point() {
    let s = seg([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    assert!(s.intersects(&p(1.0, 1.0, 1.0)));
    assert!(p(2.0, 2.0, 2.0).intersects(&s));
    assert!(!s.intersects(&p(3.0, 3.0, 3.0)));
}

#[test]
fn test_segment_segment() {
    // Crossing in the plane z = 0.
    assert!(check_intersection(
        &seg([0.0, 0.0, 0.0], [2.0, 2.0, 0.0]),
        &seg([0.0, 2.0, 0.0], [2.0, 0.0, 0.0])
    ));
    // Skew lines.
    assert!(!check_intersection(
        &seg([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]),
        &seg([1.0, -1.0, 1.0], [1.0, 1.0, 1.0])
    ));
    // Coplanar and parallel.
    assert!(!check_intersection(
        &seg([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]),
        &seg([0.0, 1.0, 0.0], [2.0, 1.0, 0.0])
    ));
    // Collinear overlap, gap and containment.
    let long = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
    assert!(long.intersects(&seg([3.0, 0.0, 0.0], [6.0, 0.0, 0.0])));
    assert!(!long.intersects(&seg([5.0, 0.0, 0.0], [6.0, 0.0, 0.0])));
    assert!(long.intersects(&seg([1.0, 0.0, 0.0], [2.0, 0.0, 0.0])));
    assert!(seg([1.0, 0.0, 0.0], [2.0, 0.0, 0.0]).intersects(&long));
}

#[test]
fn test_contained_segment_in_either_argument_order() {
    let outer = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
    let inner = seg([1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
    assert!(segment_segment(&outer, &inner));
    assert!(segment_segment(&inner, &outer));
}

#[test]
fn test_triangle_point() {
    let t = base_triangle();
    assert!(t.intersects(&p(1.0, 1.0, 0.0)));
    assert!(t.intersects(&p(2.0, 2.0, 0.0)));
    assert!(t.intersects(&p(4.0, 0.0, 0.0)));
    assert!(!t.intersects(&p(3.0, 3.0, 0.0)));
    assert!(!t.intersects(&p(1.0, 1.0, 0.5)));
}

#[test]
fn test_triangle_segment() {
    let t = base_triangle();
    // Touches the hypotenuse from above.
    assert!(t.intersects(&seg([2.0, 2.0, 0.0], [2.0, 2.0, 5.0])));
    // Pierces the interior.
    assert!(t.intersects(&seg([1.0, 1.0, -1.0], [1.0, 1.0, 1.0])));
    // Pierces the plane outside the triangle.
    assert!(!t.intersects(&seg([5.0, 5.0, -1.0], [5.0, 5.0, 1.0])));
    // Parallel, above.
    assert!(!t.intersects(&seg([0.0, 0.0, 1.0], [4.0, 0.0, 1.0])));
    // Stops short of the plane.
    assert!(!t.intersects(&seg([1.0, 1.0, 1.0], [1.0, 1.0, 3.0])));
    // Coplanar, crossing with both ends outside.
    assert!(t.intersects(&seg([-1.0, 1.0, 0.0], [5.0, 1.0, 0.0])));
    assert!(!t.intersects(&seg([5.0, 5.0, 0.0], [6.0, 6.0, 0.0])));
}

#[test]
fn test_triangle_triangle() {
    let t1 = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let crossing = tri([1.0, 0.0, 0.0], [1.0, 2.0, 0.0], [1.0, -2.0, 1.0]);
    let lifted = tri([0.0, 0.0, 1.0], [2.0, 0.0, 1.0], [0.0, 2.0, 1.0]);
    assert!(t1.intersects(&crossing));
    assert!(crossing.intersects(&t1));
    assert!(!t1.intersects(&lifted));

    let t = base_triangle();
    assert!(t.intersects(&tri([1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, 2.0, 0.0])));
    assert!(!t.intersects(&tri([10.0, 10.0, -1.0], [10.0, 10.0, 1.0], [10.0, 11.0, 0.0])));
}

#[test]
fn test_coplanar_triangles() {
    let t = base_triangle();
    assert!(t.intersects(&tri([1.0, 1.0, 0.0], [5.0, 1.0, 0.0], [1.0, 5.0, 0.0])));
    assert!(!t.intersects(&tri([5.0, 5.0, 0.0], [6.0, 5.0, 0.0], [5.0, 6.0, 0.0])));
    // Shared vertex only.
    assert!(t.intersects(&tri([4.0, 0.0, 0.0], [5.0, 0.0, 0.0], [4.0, 1.0, 0.0])));
    // Edges cross, no vertex inside the other triangle.
    let a = tri([0.0, 0.0, 0.0], [6.0, 0.0, 0.0], [3.0, 6.0, 0.0]);
    let b = tri([0.0, 4.0, 0.0], [6.0, 4.0, 0.0], [3.0, -2.0, 0.0]);
    assert!(a.intersects(&b));
}

// Absolute tolerance: geometry at very small scale loses its shape, and at
// very large scale a relatively negligible offset still separates objects.
#[test]
fn test_small_scale_triangle_degenerates() {
    let normal = [0.0, 0.0, 0.0, 4e-3, 0.0, 0.0, 0.0, 4e-3, 0.0];
    let tiny = [0.0, 0.0, 0.0, 4e-4, 0.0, 0.0, 0.0, 4e-4, 0.0];
    let storage = ObjectStorage::classify(&[RawRecord::from_coords(normal), RawRecord::from_coords(tiny)]).unwrap();
    assert_eq!(storage.triangles().len(), 1);
    assert_eq!(storage.triangles()[0].number(), 0);
    assert_eq!(storage.segments().len(), 1);
    assert_eq!(storage.segments()[0].number(), 1);
}

#[test]
fn test_scenario_holds_across_moderate_scales() {
    for scale in [1e-3, 1.0, 1e3] {
        let t = tri([0.0, 0.0, 0.0], [4.0 * scale, 0.0, 0.0], [0.0, 4.0 * scale, 0.0]);
        let s = seg([2.0 * scale, 2.0 * scale, 0.0], [2.0 * scale, 2.0 * scale, 5.0 * scale]);
        assert!(t.intersects(&s), "scale {scale}");
    }
}

#[test]
fn test_large_scale_offset_separates() {
    let big = 1e9;
    let t = tri([0.0, 0.0, 0.0], [4.0 * big, 0.0, 0.0], [0.0, 4.0 * big, 0.0]);
    assert!(t.intersects(&p(big, big, 0.0)));
    assert!(!t.intersects(&p(big, big, 1e-3)));
}

#[test]
fn test_long_segment_end_slack_is_a_distance() {
    let s = seg([0.0, 0.0, 0.0], [1000.0, 0.0, 0.0]);
    assert!(s.intersects(&p(1000.0 + 5e-7, 0.0, 0.0)));
    assert!(!s.intersects(&p(1000.0008, 0.0, 0.0)));
    assert!(!s.intersects(&p(-0.0008, 0.0, 0.0)));
    // Lateral offset far along the segment.
    assert!(!s.intersects(&p(999.0, 5e-4, 0.0)));

    let beyond = tri([1000.0005, -1.0, -1.0], [1000.0005, 2.0, -1.0], [1000.0005, -1.0, 2.0]);
    assert!(!s.intersects(&beyond));
    let reached = tri([1000.0, -1.0, -1.0], [1000.0, 2.0, -1.0], [1000.0, -1.0, 2.0]);
    assert!(s.intersects(&reached));

    let touching = seg([1000.0008, -1.0, 0.0], [1000.0008, 1.0, 0.0]);
    assert!(!s.intersects(&touching));
    assert!(!touching.intersects(&s));
}

#[test]
fn test_small_triangle_rejects_nearby_outside_point() {
    let t = tri([0.0, 0.0, 0.0], [0.002, 0.0, 0.0], [0.0, 0.002, 0.0]);
    assert!(!t.intersects(&p(0.001, -0.0002, 0.0)));
    assert!(!t.intersects(&p(0.0015, 0.0015, 0.0)));
    assert!(t.intersects(&p(0.0005, 0.0005, 0.0)));
    assert!(t.intersects(&p(0.001, 0.0, 0.0)));
    assert!(t.intersects(&p(0.001, -5e-7, 0.0)));

    let below = seg([0.001, -0.0002, -1.0], [0.001, -0.0002, 1.0]);
    assert!(!t.intersects(&below));
    let other = tri([0.001, -0.0002, 0.0], [0.002, -0.001, 0.0], [0.003, -0.0002, 0.0]);
    assert!(!t.intersects(&other));
}

#[test]
fn test_slightly_tilted_neighbours() {
    // Both normals are within the angular tolerance of +z, yet the planes
    // separate by far more than the tolerance across the triangles.
    let t = tri([0.0, 0.0, 0.0], [2000.0, 0.0, 0.0], [0.0, 2000.0, 0.0]);
    let sharing = tri([100.0, 100.0, 0.0], [2100.0, 100.0, 1e-3], [100.0, 300.0, 0.0]);
    assert!(t.intersects(&sharing));
    assert!(sharing.intersects(&t));
    let lifted = tri([100.0, 100.0, 2e-3], [2100.0, 100.0, 3e-3], [100.0, 300.0, 2e-3]);
    assert!(!t.intersects(&lifted));

    let grazing = seg([100.0, 100.0, 0.0], [2100.0, 100.0, 1e-3]);
    assert!(t.intersects(&grazing));
    let hovering = seg([100.0, 100.0, 2e-3], [2100.0, 100.0, 3e-3]);
    assert!(!t.intersects(&hovering));
}

fn arb_record() -> impl Strategy<Value = RawRecord<f64>> {
    prop::array::uniform9(0i32..6).prop_map(|c| RawRecord::from_coords(c.map(f64::from)))
}

proptest! {
    #[test]
    fn prop_intersection_is_symmetric(a in arb_record(), b in arb_record()) {
        let storage = ObjectStorage::classify(&[a, b]).unwrap();
        let x = storage.object(0).unwrap();
        let y = storage.object(1).unwrap();
        prop_assert_eq!(x.intersects(&y), y.intersects(&x));
    }

    #[test]
    fn prop_object_intersects_itself(a in arb_record()) {
        let storage = ObjectStorage::classify(&[a]).unwrap();
        let x = storage.object(0).unwrap();
        prop_assert!(x.intersects(&x));
    }
}
