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

use intersector::{
    IntersectError, ObjectKind, ObjectStorage, Point3, RawRecord,
    objects::{Shape, classify_record},
};

fn rec(c: [f64; 9]) -> RawRecord<f64> {
    RawRecord::from_coords(c)
}

#[test]
fn test_two_coincident_points_make_a_segment() {
    let cases = [
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0],
        [0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0],
        [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    ];
    for c in cases {
        match classify_record(&rec(c)).unwrap() {
            Shape::Segment(s) => {
                let ends = [*s.origin(), s.end()];
                assert!(ends.iter().any(|p| p.approx_eq(&Point3::new(0.0, 0.0, 0.0))));
                assert!(ends.iter().any(|p| p.approx_eq(&Point3::new(1.0, 2.0, 3.0))));
            }
            other => panic!("expected a segment for {c:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_chained_coincidence_is_a_point() {
    // p1 ~ p2 and p2 ~ p3, while p1 and p3 are just beyond the tolerance.
    let r = rec([0.0, 0.0, 0.0, 8e-7, 0.0, 0.0, 1.6e-6, 0.0, 0.0]);
    assert!(matches!(classify_record(&r).unwrap(), Shape::Point(_)));
}

#[test]
fn test_proper_triangle() {
    let r = rec([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    match classify_record(&r).unwrap() {
        Shape::Triangle(t) => assert_eq!(t.points(), &r.points),
        other => panic!("expected a triangle, got {other:?}"),
    }
}

#[test]
fn test_storage_keeps_numbers_and_order() {
    let records = [
        rec([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
        rec([5.0; 9]),
        rec([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 3.0, 3.0]),
        rec([1.0; 9]),
        rec([0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0]),
        rec([0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0]),
    ];
    let storage = ObjectStorage::classify(&records).unwrap();

    assert_eq!(storage.len(), 6);
    let tri: Vec<_> = storage.triangles().iter().map(|o| o.number()).collect();
    let seg: Vec<_> = storage.segments().iter().map(|o| o.number()).collect();
    let pts: Vec<_> = storage.points().iter().map(|o| o.number()).collect();
    assert_eq!(tri, vec![0, 4]);
    assert_eq!(seg, vec![2, 5]);
    assert_eq!(pts, vec![1, 3]);

    let kinds: Vec<_> = (0..6).map(|n| storage.object(n).unwrap().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ObjectKind::Triangle,
            ObjectKind::Point,
            ObjectKind::Segment,
            ObjectKind::Point,
            ObjectKind::Triangle,
            ObjectKind::Segment,
        ]
    );
}

#[test]
fn test_collinear_record_becomes_covering_segment() {
    let r = rec([1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 2.0, 2.0, 2.0]);
    match classify_record(&r).unwrap() {
        Shape::Segment(s) => {
            assert!((s.length() - 12f64.sqrt()).abs() < 1e-12);
        }
        other => panic!("expected a segment, got {other:?}"),
    }
}

#[test]
fn test_non_finite_record_is_rejected() {
    let records = [
        rec([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
        rec([0.0, 0.0, f64::INFINITY, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
    ];
    match ObjectStorage::classify(&records) {
        Err(IntersectError::DegenerateGeometry { details }) => assert!(details.contains("record 1")),
        other => panic!("expected a degenerate geometry error, got {other:?}"),
    }
}

#[test]
fn test_empty_input() {
    let storage = ObjectStorage::<f64>::classify(&[]).unwrap();
    assert!(storage.is_empty());
    assert_eq!(storage.iter().count(), 0);
}
