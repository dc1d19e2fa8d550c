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
        intersection::Intersects,
        plane::Plane,
        point::Point3,
        segment::Segment3,
        triangle::Triangle3,
    },
    kernel::Side,
    numeric::scalar::Scalar,
};

/// Untyped input record: three points that may describe a triangle, a
/// segment or a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawRecord<T: Scalar> {
    pub points: [Point3<T>; 3],
}

impl<T: Scalar> RawRecord<T> {
    pub fn new(p1: Point3<T>, p2: Point3<T>, p3: Point3<T>) -> Self {
        RawRecord {
            points: [p1, p2, p3],
        }
    }

    /// Nine coordinates, three per point.
    pub fn from_coords(c: [T; 9]) -> Self {
        RawRecord::new(
            Point3::new(c[0], c[1], c[2]),
            Point3::new(c[3], c[4], c[5]),
            Point3::new(c[6], c[7], c[8]),
        )
    }

    pub fn coords(&self) -> [T; 9] {
        let [p1, p2, p3] = self.points;
        [p1.x(), p1.y(), p1.z(), p2.x(), p2.y(), p2.z(), p3.x(), p3.y(), p3.z()]
    }
}

/// A typed primitive tagged with its position in the input sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Object<S> {
    number: usize,
    shape: S,
}

impl<S> Object<S> {
    pub fn new(shape: S, number: usize) -> Self {
        Object { number, shape }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }
}

pub type ObjectPoint<T> = Object<Point3<T>>;
pub type ObjectSegment<T> = Object<Segment3<T>>;
pub type ObjectTriangle<T> = Object<Triangle3<T>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Point,
    Segment,
    Triangle,
}

/// Borrowed view of any stored object.
#[derive(Clone, Copy, Debug)]
pub enum GeometryObject<'a, T: Scalar> {
    Point(&'a ObjectPoint<T>),
    Segment(&'a ObjectSegment<T>),
    Triangle(&'a ObjectTriangle<T>),
}

impl<'a, T: Scalar> GeometryObject<'a, T> {
    pub fn number(&self) -> usize {
        match self {
            GeometryObject::Point(o) => o.number(),
            GeometryObject::Segment(o) => o.number(),
            GeometryObject::Triangle(o) => o.number(),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            GeometryObject::Point(_) => ObjectKind::Point,
            GeometryObject::Segment(_) => ObjectKind::Segment,
            GeometryObject::Triangle(_) => ObjectKind::Triangle,
        }
    }

    /// Vertices, endpoints, or the point itself.
    pub fn sample_points(&self) -> Vec<Point3<T>> {
        match self {
            GeometryObject::Point(o) => vec![*o.shape()],
            GeometryObject::Segment(o) => vec![*o.shape().origin(), o.shape().end()],
            GeometryObject::Triangle(o) => o.shape().points().to_vec(),
        }
    }

    /// Supporting plane, for triangles only.
    pub fn plane(&self) -> Option<&'a Plane<T>> {
        match self {
            GeometryObject::Triangle(o) => Some(o.shape().plane()),
            _ => None,
        }
    }

    /// Strict side only if every sample point is strictly on that side.
    pub fn side_of(&self, plane: &Plane<T>) -> Side {
        match self {
            GeometryObject::Point(o) => plane.side_of(o.shape()),
            GeometryObject::Segment(o) => plane.segment_side(o.shape()),
            GeometryObject::Triangle(o) => plane.triangle_side(o.shape()),
        }
    }

    pub fn intersects(&self, other: &GeometryObject<'_, T>) -> bool {
        use GeometryObject as G;
        match (self, other) {
            (G::Triangle(a), G::Triangle(b)) => a.shape().intersects(b.shape()),
            (G::Triangle(a), G::Segment(b)) => a.shape().intersects(b.shape()),
            (G::Triangle(a), G::Point(b)) => a.shape().intersects(b.shape()),
            (G::Segment(a), G::Triangle(b)) => a.shape().intersects(b.shape()),
            (G::Segment(a), G::Segment(b)) => a.shape().intersects(b.shape()),
            (G::Segment(a), G::Point(b)) => a.shape().intersects(b.shape()),
            (G::Point(a), G::Triangle(b)) => a.shape().intersects(b.shape()),
            (G::Point(a), G::Segment(b)) => a.shape().intersects(b.shape()),
            (G::Point(a), G::Point(b)) => a.shape().intersects(b.shape()),
        }
    }
}
