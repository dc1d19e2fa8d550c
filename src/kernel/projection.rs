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

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

/// Given a plane normal, return the indices of the two axes to keep and the
/// dropped one. The axis with the largest normal component is dropped, which
/// gives the best-conditioned projection.
pub fn coplanar_axes<T: Scalar>(n: &Vector3<T>) -> (usize, usize, usize) {
    let na = [n[0].abs(), n[1].abs(), n[2].abs()];
    if na[0] > na[1] && na[0] > na[2] {
        (1, 2, 0)
    } else if na[1] > na[2] {
        (0, 2, 1)
    } else {
        (0, 1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::coplanar_axes;
    use crate::geometry::vector::Vector3;

    #[test]
    fn drops_dominant_axis() {
        assert_eq!(coplanar_axes(&Vector3::new(0.0, 0.0, 1.0)), (0, 1, 2));
        assert_eq!(coplanar_axes(&Vector3::new(-0.9, 0.1, 0.3)), (1, 2, 0));
        assert_eq!(coplanar_axes(&Vector3::new(0.2, -0.8, 0.5)), (0, 2, 1));
    }
}
