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
    geometry::{point::Point, vector::Vector},
    numeric::scalar::Scalar,
};

/// A cut: origin point plus a non-null direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    origin: Point<T, N>,
    direction: Vector<T, N>,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> IntersectResult<Self> {
        Self::from_origin_direction(a, &a.vector_to(b))
    }

    pub fn from_origin_direction(origin: &Point<T, N>, direction: &Vector<T, N>) -> IntersectResult<Self> {
        if direction.is_null() {
            return Err(IntersectError::degenerate(format!(
                "segment of zero length at {:?}",
                origin.coords
            )));
        }
        Ok(Segment {
            origin: *origin,
            direction: *direction,
        })
    }

    /// Unchecked constructor for projections of already valid segments,
    /// which may shrink below the tolerance.
    pub(crate) fn from_parts(origin: Point<T, N>, direction: Vector<T, N>) -> Self {
        Segment { origin, direction }
    }

    pub fn origin(&self) -> &Point<T, N> {
        &self.origin
    }

    pub fn end(&self) -> Point<T, N> {
        self.origin.add_vector(&self.direction)
    }

    pub fn direction(&self) -> &Vector<T, N> {
        &self.direction
    }

    pub fn length(&self) -> T {
        self.direction.norm()
    }

    pub fn point_at(&self, t: T) -> Point<T, N> {
        self.origin.add_vector(&self.direction.scale(t))
    }

    /// Parameter of `p` along the segment, measured on the dominant axis of
    /// the direction. Only meaningful for points on the supporting line.
    pub fn parameter_of(&self, p: &Point<T, N>) -> T {
        let k = self.direction.dominant_axis();
        (p[k] - self.origin[k]) / self.direction[k]
    }

    /// Parameter of the foot of the perpendicular from `p` to the line.
    pub fn closest_parameter(&self, p: &Point<T, N>) -> T {
        self.direction.dot(&self.origin.vector_to(p)) / self.direction.norm_squared()
    }

    /// True if `t` maps to a point of the segment, allowing an overshoot of
    /// one tolerance measured as a distance past either end.
    pub fn contains_parameter(&self, t: T) -> bool {
        let slack = T::tolerance() / self.length();
        t >= -slack && t <= T::one() + slack
    }

    pub fn inverse(&self) -> Self {
        Segment {
            origin: self.end(),
            direction: -self.direction,
        }
    }
}

impl<T: Scalar> Segment<T, 3> {
    pub fn project(&self, i0: usize, i1: usize) -> Segment<T, 2> {
        Segment::from_parts(self.origin.project(i0, i1), self.direction.project(i0, i1))
    }
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    #[test]
    fn parameter_slack_shrinks_with_length() {
        let short = Segment3::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 0.0, 0.0)).unwrap();
        let long = Segment3::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1000.0, 0.0, 0.0)).unwrap();
        assert!(short.contains_parameter(1.0 + 5e-7));
        assert!(!long.contains_parameter(1.0 + 5e-7));
        assert!(long.contains_parameter(1.0 + 5e-10));
        assert!(!long.contains_parameter(-5e-9));
    }

    #[test]
    fn closest_parameter_is_the_foot() {
        let s = Segment3::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(4.0, 0.0, 0.0)).unwrap();
        assert_eq!(s.closest_parameter(&Point3::new(1.0, 3.0, -2.0)), 0.25);
        assert_eq!(s.closest_parameter(&Point3::new(-4.0, 1.0, 0.0)), -1.0);
    }
}
