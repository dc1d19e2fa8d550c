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

pub mod predicates;
pub mod projection;

pub use predicates::*;
pub use projection::*;

/// Relative position of two lines or two planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// Directions (or normals) are not parallel.
    Common,
    /// Parallel, offset by more than the tolerance.
    Parallel,
    /// Parallel and coincident.
    Match,
}

/// Position of a point (or a whole object) relative to a plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Negative,
    On,
    Positive,
}

impl Side {
    pub fn from_sign(sign: i8) -> Self {
        match sign {
            s if s > 0 => Side::Positive,
            s if s < 0 => Side::Negative,
            _ => Side::On,
        }
    }

    pub fn value(self) -> i8 {
        match self {
            Side::Negative => -1,
            Side::On => 0,
            Side::Positive => 1,
        }
    }

    /// Strictly opposite sides.
    pub fn is_opposite(self, other: Side) -> bool {
        self.value() * other.value() < 0
    }
}
