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
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

use crate::numeric::scalar::Scalar;

/// Dimension-specific operations: the cross product and the parallelism
/// test built on it.
pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    type Cross;

    fn cross(&self, other: &Self) -> Self::Cross;

    /// Null vectors are parallel to anything. Otherwise the normalized
    /// directions must have a null cross product, so anti-parallel
    /// vectors count as parallel.
    fn is_parallel(&self, other: &Self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_coords(coords: [T; N]) -> Self {
        Vector { coords }
    }

    pub fn zero() -> Self {
        Vector {
            coords: [T::zero(); N],
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    pub fn is_null(&self) -> bool {
        self.norm() < T::tolerance()
    }

    pub fn scale(&self, k: T) -> Self {
        Vector {
            coords: from_fn(|i| self.coords[i] * k),
        }
    }

    /// Unit vector along `self`. The caller must have excluded null vectors.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        debug_assert!(n > T::zero(), "normalizing a zero-length vector");
        self.scale(T::one() / n)
    }

    /// Index of the component with the largest magnitude (lowest index on ties).
    pub fn dominant_axis(&self) -> usize {
        let mut best = 0;
        for i in 1..N {
            if self.coords[i].abs() > self.coords[best].abs() {
                best = i;
            }
        }
        best
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Vector { coords: [x, y] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector { coords: [x, y, z] }
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

    pub fn project(&self, i0: usize, i1: usize) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.coords[i0], self.coords[i1])
    }
}

impl<T: Scalar> VectorOps<T, 2> for Vector<T, 2> {
    type Cross = T;

    fn cross(&self, other: &Self) -> T {
        self.x() * other.y() - self.y() * other.x()
    }

    fn is_parallel(&self, other: &Self) -> bool {
        if self.is_null() || other.is_null() {
            return true;
        }
        self.normalized()
            .cross(&other.normalized())
            .is_approx_zero()
    }
}

impl<T: Scalar> VectorOps<T, 3> for Vector<T, 3> {
    type Cross = Vector<T, 3>;

    fn cross(&self, other: &Self) -> Vector<T, 3> {
        Vector::<T, 3>::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    fn is_parallel(&self, other: &Self) -> bool {
        if self.is_null() || other.is_null() {
            return true;
        }
        self.normalized().cross(&other.normalized()).is_null()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector {
            coords: from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        Vector {
            coords: from_fn(|i| -self.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, k: T) -> Self::Output {
        self.scale(k)
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
