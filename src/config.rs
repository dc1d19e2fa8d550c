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

//! Finder and generator settings.
//!
//! ```
//! use intersector::{FinderConfig, GeneratorParams, SearchStrategy};
//!
//! let finder = FinderConfig::default().with_stats(true);
//! assert_eq!(finder.strategy, SearchStrategy::PlanePartition);
//!
//! let params = GeneratorParams::default().with_count(10).with_seed(7);
//! assert_eq!(params.count, 10);
//! ```

use crate::error::{IntersectError, IntersectResult};

/// How the finder enumerates candidate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Recursive split of the object list by triangle planes.
    #[default]
    PlanePartition,
    /// Test every pair. Quadratic, used as a reference.
    BruteForce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinderConfig {
    pub strategy: SearchStrategy,
    /// Record [`PartitionStats`](crate::finder::PartitionStats) in the result.
    pub collect_stats: bool,
}

impl FinderConfig {
    /// Reference configuration that tests all pairs.
    #[must_use]
    pub fn brute_force() -> Self {
        Self {
            strategy: SearchStrategy::BruteForce,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, collect_stats: bool) -> Self {
        self.collect_stats = collect_stats;
        self
    }
}

/// Parameters of the random triangle generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Number of records to produce.
    pub count: usize,
    /// Coordinates are drawn from `[0, area_size)`.
    pub area_size: f64,
    /// Largest offset of the second and third vertex from the first.
    pub max_triangle_size: f64,
    /// Grid resolution: coordinates are multiples of `1 / accuracy`.
    pub accuracy: u32,
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            count: 2000,
            area_size: 50.0,
            max_triangle_size: 5.0,
            accuracy: 100,
            seed: None,
        }
    }
}

impl GeneratorParams {
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_area_size(mut self, area_size: f64) -> Self {
        self.area_size = area_size;
        self
    }

    #[must_use]
    pub fn with_max_triangle_size(mut self, max_triangle_size: f64) -> Self {
        self.max_triangle_size = max_triangle_size;
        self
    }

    #[must_use]
    pub fn with_accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Both ranges must hold at least two grid steps, otherwise a
    /// non-degenerate triangle may be impossible to draw.
    pub fn validate(&self) -> IntersectResult<()> {
        if self.accuracy == 0 {
            return Err(IntersectError::InvalidParameter {
                details: "accuracy must be positive".into(),
            });
        }
        let acc = f64::from(self.accuracy);
        for (name, value) in [("area_size", self.area_size), ("max_triangle_size", self.max_triangle_size)] {
            if !value.is_finite() || value * acc < 2.0 {
                return Err(IntersectError::InvalidParameter {
                    details: format!("{name} = {value} is too small for accuracy {}", self.accuracy),
                });
            }
        }
        Ok(())
    }
}
