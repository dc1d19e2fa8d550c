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

use num_traits::Float;

use std::fmt::{Debug, Display};

/// Floating scalar used by every primitive and predicate.
///
/// All equality, parallelism and on-plane decisions go through
/// [`Scalar::tolerance`], a fixed absolute epsilon. Results for coordinates
/// far from unit magnitude are therefore scale-sensitive.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    fn tolerance() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns -1, 0, or +1; values within the tolerance count as zero.
    fn sign(&self) -> i8 {
        let tol = Self::tolerance();
        if *self > tol {
            1
        } else if *self < -tol {
            -1
        } else {
            0
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).abs() <= Self::tolerance()
    }

    fn is_approx_zero(&self) -> bool {
        self.abs() < Self::tolerance()
    }
}

impl Scalar for f64 {
    fn tolerance() -> Self {
        1e-6
    }
}
