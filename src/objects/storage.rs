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

use tracing::debug;

use crate::{
    error::{IntersectError, IntersectResult},
    geometry::{point::Point3, segment::Segment3, triangle::Triangle3},
    numeric::scalar::Scalar,
    objects::object::{GeometryObject, Object, ObjectPoint, ObjectSegment, ObjectTriangle, RawRecord},
};

/// Typed form of a single record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<T: Scalar> {
    Point(Point3<T>),
    Segment(Segment3<T>),
    Triangle(Triangle3<T>),
}

/// The pair of points with the largest separation.
fn farthest_pair<T: Scalar>(pts: &[Point3<T>; 3]) -> (Point3<T>, Point3<T>) {
    let mut best = (pts[0], pts[1]);
    let mut best_len = pts[0].vector_to(&pts[1]).norm_squared();
    for (i, j) in [(0, 2), (1, 2)] {
        let len = pts[i].vector_to(&pts[j]).norm_squared();
        if len > best_len {
            best_len = len;
            best = (pts[i], pts[j]);
        }
    }
    best
}

/// Decide what a record actually describes.
///
/// One coincident pair makes a segment, two or more make a point. Three
/// distinct points that span no plane become the segment between the two
/// farthest ones. Non-finite coordinates are rejected.
pub fn classify_record<T: Scalar>(record: &RawRecord<T>) -> IntersectResult<Shape<T>> {
    let [p1, p2, p3] = record.points;
    if !record.points.iter().all(|p| p.is_real()) {
        return Err(IntersectError::degenerate("record has non-finite coordinates"));
    }

    let m12 = p1.approx_eq(&p2);
    let m13 = p1.approx_eq(&p3);
    let m23 = p2.approx_eq(&p3);
    match (m12, m13, m23) {
        (false, false, false) => {}
        (true, false, false) => return Segment3::new(&p1, &p3).map(Shape::Segment),
        (false, true, false) | (false, false, true) => return Segment3::new(&p1, &p2).map(Shape::Segment),
        // Two or three coincident pairs leave a single distinct location.
        _ => return Ok(Shape::Point(p1)),
    }

    match Triangle3::new(&p1, &p2, &p3) {
        Ok(t) => Ok(Shape::Triangle(t)),
        Err(_) => {
            let (a, b) = farthest_pair(&record.points);
            Segment3::new(&a, &b).map(Shape::Segment)
        }
    }
}

/// Classified objects, one list per kind. Object numbers are the record
/// positions in the input sequence.
#[derive(Clone, Debug, Default)]
pub struct ObjectStorage<T: Scalar> {
    points: Vec<ObjectPoint<T>>,
    segments: Vec<ObjectSegment<T>>,
    triangles: Vec<ObjectTriangle<T>>,
}

impl<T: Scalar> ObjectStorage<T> {
    pub fn new() -> Self {
        ObjectStorage {
            points: Vec::new(),
            segments: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Classify every record. Fails on the first record that cannot be turned
    /// into any object.
    pub fn classify(records: &[RawRecord<T>]) -> IntersectResult<Self> {
        let mut storage = ObjectStorage::new();
        for (number, record) in records.iter().enumerate() {
            let shape = classify_record(record).map_err(|e| match e {
                IntersectError::DegenerateGeometry { details } => {
                    IntersectError::degenerate(format!("record {number}: {details}"))
                }
                other => other,
            })?;
            storage.push(shape, number);
        }

        debug!(
            records = records.len(),
            triangles = storage.triangles.len(),
            segments = storage.segments.len(),
            points = storage.points.len(),
            "Classified records"
        );
        Ok(storage)
    }

    fn push(&mut self, shape: Shape<T>, number: usize) {
        match shape {
            Shape::Point(p) => self.points.push(Object::new(p, number)),
            Shape::Segment(s) => self.segments.push(Object::new(s, number)),
            Shape::Triangle(t) => self.triangles.push(Object::new(t, number)),
        }
    }

    pub fn points(&self) -> &[ObjectPoint<T>] {
        &self.points
    }

    pub fn segments(&self) -> &[ObjectSegment<T>] {
        &self.segments
    }

    pub fn triangles(&self) -> &[ObjectTriangle<T>] {
        &self.triangles
    }

    /// Total number of objects, which is also one past the largest number.
    pub fn len(&self) -> usize {
        self.points.len() + self.segments.len() + self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All objects: triangles first, then segments, then points.
    pub fn iter(&self) -> impl Iterator<Item = GeometryObject<'_, T>> {
        self.triangles
            .iter()
            .map(GeometryObject::Triangle)
            .chain(self.segments.iter().map(GeometryObject::Segment))
            .chain(self.points.iter().map(GeometryObject::Point))
    }

    /// Object with the given input number.
    pub fn object(&self, number: usize) -> Option<GeometryObject<'_, T>> {
        self.iter().find(|o| o.number() == number)
    }
}
