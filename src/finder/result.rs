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
    numeric::scalar::Scalar,
    objects::{GeometryObject, ObjectPoint, ObjectSegment, ObjectStorage, ObjectTriangle},
};

/// Counters describing one partition search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Sublists split by a triangle root.
    pub triangle_splits: usize,
    /// Splits where every remaining object was on the non-negative side.
    pub non_negative_only: usize,
    /// Splits where every remaining object was on the non-positive side.
    pub non_positive_only: usize,
    /// Splits that produced two sublists.
    pub both_sides: usize,
    /// Sublists headed by a segment or point, scanned linearly.
    pub linear_scans: usize,
    /// Pairwise intersection tests performed.
    pub pair_tests: usize,
}

/// Classified objects together with one intersection flag per object number.
#[derive(Clone, Debug)]
pub struct ObjectsAndIntersections<T: Scalar> {
    objects: ObjectStorage<T>,
    flags: Vec<bool>,
    stats: Option<PartitionStats>,
}

impl<T: Scalar> ObjectsAndIntersections<T> {
    pub fn new(objects: ObjectStorage<T>, flags: Vec<bool>, stats: Option<PartitionStats>) -> IntersectResult<Self> {
        if flags.len() != objects.len() {
            return Err(IntersectError::InconsistentState {
                details: format!("{} flags for {} objects", flags.len(), objects.len()),
            });
        }
        Ok(ObjectsAndIntersections { objects, flags, stats })
    }

    pub fn objects(&self) -> &ObjectStorage<T> {
        &self.objects
    }

    pub fn triangles(&self) -> &[ObjectTriangle<T>] {
        self.objects.triangles()
    }

    pub fn segments(&self) -> &[ObjectSegment<T>] {
        self.objects.segments()
    }

    pub fn points(&self) -> &[ObjectPoint<T>] {
        self.objects.points()
    }

    pub fn triangles_num(&self) -> usize {
        self.objects.triangles().len()
    }

    pub fn segments_num(&self) -> usize {
        self.objects.segments().len()
    }

    pub fn points_num(&self) -> usize {
        self.objects.points().len()
    }

    pub fn objects_num(&self) -> usize {
        self.flags.len()
    }

    pub fn intersection_flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn is_object_intersects(&self, number: usize) -> IntersectResult<bool> {
        self.flags.get(number).copied().ok_or(IntersectError::InvalidIndex {
            index: number,
            count: self.flags.len(),
        })
    }

    /// Numbers of all flagged objects, ascending.
    pub fn intersecting_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags.iter().enumerate().filter(|(_, f)| **f).map(|(i, _)| i)
    }

    pub fn object(&self, number: usize) -> Option<GeometryObject<'_, T>> {
        self.objects.object(number)
    }

    pub fn stats(&self) -> Option<&PartitionStats> {
        self.stats.as_ref()
    }

    pub fn into_parts(self) -> (ObjectStorage<T>, Vec<bool>) {
        (self.objects, self.flags)
    }
}
