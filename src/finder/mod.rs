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

//! Finds every object that intersects at least one other object.

pub mod partition;
pub mod result;

pub use partition::{PlaneSplit, brute_force_search, partition_search, split_by_plane};
pub use result::{ObjectsAndIntersections, PartitionStats};

use tracing::info;

use crate::{
    config::{FinderConfig, SearchStrategy},
    error::IntersectResult,
    numeric::scalar::Scalar,
    objects::{GeometryObject, ObjectStorage},
};

pub struct IntersectionFinder<T: Scalar> {
    objects: ObjectStorage<T>,
    config: FinderConfig,
}

impl<T: Scalar> IntersectionFinder<T> {
    pub fn new(objects: ObjectStorage<T>) -> Self {
        Self::with_config(objects, FinderConfig::default())
    }

    pub fn with_config(objects: ObjectStorage<T>, config: FinderConfig) -> Self {
        IntersectionFinder { objects, config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Run the search and hand the objects back with their flags.
    pub fn compute_intersections(self) -> IntersectResult<ObjectsAndIntersections<T>> {
        let count = self.objects.len();
        info!(objects = count, strategy = ?self.config.strategy, "Searching for intersections");

        let mut flags = vec![false; count];
        let mut stats = PartitionStats::default();
        {
            let list: Vec<GeometryObject<'_, T>> = self.objects.iter().collect();
            match self.config.strategy {
                SearchStrategy::PlanePartition => partition_search(list, &mut flags, &mut stats),
                SearchStrategy::BruteForce => brute_force_search(&list, &mut flags, &mut stats),
            }
        }

        info!(
            objects = count,
            intersecting = flags.iter().filter(|f| **f).count(),
            pair_tests = stats.pair_tests,
            "Intersection search complete"
        );

        let stats = self.config.collect_stats.then_some(stats);
        ObjectsAndIntersections::new(self.objects, flags, stats)
    }
}
