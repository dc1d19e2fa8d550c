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

//! Unit quaternion rotations, for callers that orient objects or a camera.
//! Not used by the intersection tests themselves.

use std::ops::{Mul, MulAssign};

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedQuaternion<T: Scalar> {
    a0: T,
    a1: T,
    a2: T,
    a3: T,
}

impl<T: Scalar> NormalizedQuaternion<T> {
    /// Rotation by `angle` radians around `axis`. The axis must not be null.
    pub fn new(angle: T, axis: &Vector3<T>) -> Self {
        let v = axis.normalized();
        let half = angle / T::two();
        let k = half.sin();
        NormalizedQuaternion {
            a0: half.cos(),
            a1: k * v.x(),
            a2: k * v.y(),
            a3: k * v.z(),
        }
    }

    pub fn components(&self) -> [T; 4] {
        [self.a0, self.a1, self.a2, self.a3]
    }

    /// Conjugate, which is the inverse for a unit quaternion.
    pub fn adjoint(&self) -> Self {
        NormalizedQuaternion {
            a0: self.a0,
            a1: -self.a1,
            a2: -self.a2,
            a3: -self.a3,
        }
    }

    /// `q * v * q^-1`.
    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        let adj = self.adjoint();

        let t0 = -self.a1 * v.x() - self.a2 * v.y() - self.a3 * v.z();
        let t1 = self.a0 * v.x() + self.a2 * v.z() - self.a3 * v.y();
        let t2 = self.a0 * v.y() + self.a3 * v.x() - self.a1 * v.z();
        let t3 = self.a0 * v.z() + self.a1 * v.y() - self.a2 * v.x();

        Vector3::new(
            t0 * adj.a1 + t1 * adj.a0 + t2 * adj.a3 - t3 * adj.a2,
            t0 * adj.a2 + t2 * adj.a0 + t3 * adj.a1 - t1 * adj.a3,
            t0 * adj.a3 + t3 * adj.a0 + t1 * adj.a2 - t2 * adj.a1,
        )
    }
}

impl<T: Scalar> MulAssign for NormalizedQuaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        let l = *self;
        self.a0 = l.a0 * rhs.a0 - l.a1 * rhs.a1 - l.a2 * rhs.a2 - l.a3 * rhs.a3;
        self.a1 = l.a0 * rhs.a1 + l.a1 * rhs.a0 + l.a2 * rhs.a3 - l.a3 * rhs.a2;
        self.a2 = l.a0 * rhs.a2 + l.a2 * rhs.a0 + l.a3 * rhs.a1 - l.a1 * rhs.a3;
        self.a3 = l.a0 * rhs.a3 + l.a3 * rhs.a0 + l.a1 * rhs.a2 - l.a2 * rhs.a1;
    }
}

impl<T: Scalar> Mul for NormalizedQuaternion<T> {
    type Output = NormalizedQuaternion<T>;
    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out *= rhs;
        out
    }
}

impl<T: Scalar> Vector3<T> {
    pub fn rotate(&self, q: &NormalizedQuaternion<T>) -> Vector3<T> {
        q.rotate(self)
    }
}
