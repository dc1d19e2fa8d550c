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

use std::{
    array::from_fn,
    ops::{Add, Index, IndexMut, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: [T::zero(); N],
        }
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn from_coords(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector::from_coords(from_fn(|i| other.coords[i] - self.coords[i]))
    }

    pub fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + v[i]),
        }
    }

    /// Per-axis equality within the tolerance.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.approx_eq(b))
    }

    /// False if any coordinate is NaN or infinite.
    pub fn is_real(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Lexicographic total order on the raw coordinates.
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        for i in 0..N {
            match self.coords[i].partial_cmp(&other.coords[i]) {
                Some(std::cmp::Ordering::Equal) | None => continue,
                Some(ordering) => return ordering,
            }
        }
        std::cmp::Ordering::Equal
    }
}

impl<T: Scalar> Point<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Point { coords: [x, y] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point { coords: [x, y, z] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn z(&self) -> T {
        self.coords[2]
    }

    /// Keep the two given axes, dropping the third.
    pub fn project(&self, i0: usize, i1: usize) -> Point<T, 2> {
        Point::<T, 2>::new(self.coords[i0], self.coords[i1])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Vector<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Vector<T, N>) -> Self::Output {
        self.add_vector(rhs)
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.add_vector(&rhs)
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        rhs.vector_to(self)
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        rhs.vector_to(&self)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(p: Point<T, N>) -> Self {
        p.coords
    }
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;
