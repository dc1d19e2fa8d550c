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

//! Error types for primitive construction, result assembly and record I/O.

use thiserror::Error;

/// Errors raised by the intersection crate.
///
/// Geometric predicates and pairwise tests never fail; errors only surface
/// at construction boundaries and when reading or assembling results.
#[derive(Debug, Error)]
pub enum IntersectError {
    /// Zero-length segment, or coincident/collinear points handed to a
    /// plane or triangle constructor.
    #[error("degenerate geometry: {details}")]
    DegenerateGeometry {
        /// Description of the degeneracy.
        details: String,
    },

    /// Result assembly received a flag table that does not match the
    /// object storage. This is an internal bug, not a user error.
    #[error("inconsistent state: {details}")]
    InconsistentState {
        /// Description of the mismatch.
        details: String,
    },

    /// Lookup of an object number outside `0..count`.
    #[error("invalid object number {index} (object count is {count})")]
    InvalidIndex {
        /// Requested object number.
        index: usize,
        /// Number of stored objects.
        count: usize,
    },

    /// Generator or finder parameters that cannot produce a result.
    #[error("invalid parameter: {details}")]
    InvalidParameter {
        /// Description of the rejected parameter.
        details: String,
    },

    /// Malformed record input.
    #[error("parse error: {details}")]
    Parse {
        /// Description of the malformed input.
        details: String,
    },

    /// Underlying I/O failure while reading or writing records.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntersectError {
    pub(crate) fn degenerate(details: impl Into<String>) -> Self {
        IntersectError::DegenerateGeometry {
            details: details.into(),
        }
    }

    pub(crate) fn parse(details: impl Into<String>) -> Self {
        IntersectError::Parse {
            details: details.into(),
        }
    }
}

/// Result type used throughout the crate.
pub type IntersectResult<T> = Result<T, IntersectError>;
