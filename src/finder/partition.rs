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

use tracing::trace;

use crate::{
    finder::result::PartitionStats,
    geometry::plane::Plane,
    kernel::Side,
    numeric::scalar::Scalar,
    objects::GeometryObject,
};

/// Objects sorted against one plane. An object touching the plane lands in
/// both halves and in `on_plane`.
#[derive(Clone, Debug, Default)]
pub struct PlaneSplit<'a, T: Scalar> {
    pub non_positive: Vec<GeometryObject<'a, T>>,
    pub non_negative: Vec<GeometryObject<'a, T>>,
    pub on_plane: Vec<GeometryObject<'a, T>>,
}

pub fn split_by_plane<'a, T: Scalar>(plane: &Plane<T>, objects: &[GeometryObject<'a, T>]) -> PlaneSplit<'a, T> {
    let mut split = PlaneSplit {
        non_positive: Vec::new(),
        non_negative: Vec::new(),
        on_plane: Vec::new(),
    };
    for obj in objects {
        match obj.side_of(plane) {
            Side::Negative => split.non_positive.push(*obj),
            Side::Positive => split.non_negative.push(*obj),
            Side::On => {
                split.non_positive.push(*obj);
                split.non_negative.push(*obj);
                split.on_plane.push(*obj);
            }
        }
    }
    split
}

fn test_pair<T: Scalar>(
    a: &GeometryObject<'_, T>,
    b: &GeometryObject<'_, T>,
    flags: &mut [bool],
    stats: &mut PartitionStats,
) {
    stats.pair_tests += 1;
    if a.intersects(b) {
        flags[a.number()] = true;
        flags[b.number()] = true;
    }
}

/// Plane-partition search over `objects`, flagging every object that
/// intersects at least one other.
///
/// The head of each pending list is tested against the rest. A triangle head
/// then splits the rest by its plane: objects strictly on opposite sides
/// cannot meet, so each side is searched on its own. Every step drops the
/// head, so the pending lists always shrink.
pub fn partition_search<T: Scalar>(objects: Vec<GeometryObject<'_, T>>, flags: &mut [bool], stats: &mut PartitionStats) {
    let mut pending = vec![objects];

    while let Some(list) = pending.pop() {
        let Some((root, rest)) = list.split_first() else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }

        let Some(plane) = root.plane() else {
            stats.linear_scans += 1;
            for other in rest {
                test_pair(root, other, flags, stats);
            }
            pending.push(rest.to_vec());
            continue;
        };

        let split = split_by_plane(plane, rest);
        for other in &split.on_plane {
            test_pair(root, other, flags, stats);
        }
        stats.triangle_splits += 1;
        trace!(
            root = root.number(),
            rest = rest.len(),
            non_positive = split.non_positive.len(),
            non_negative = split.non_negative.len(),
            on_plane = split.on_plane.len(),
            "Split by triangle plane"
        );

        if split.non_positive.len() == rest.len() {
            stats.non_positive_only += 1;
            pending.push(split.non_positive);
        } else if split.non_negative.len() == rest.len() {
            stats.non_negative_only += 1;
            pending.push(split.non_negative);
        } else {
            stats.both_sides += 1;
            pending.push(split.non_positive);
            pending.push(split.non_negative);
        }
    }
}

/// Reference search: every unordered pair, once.
pub fn brute_force_search<T: Scalar>(objects: &[GeometryObject<'_, T>], flags: &mut [bool], stats: &mut PartitionStats) {
    for (i, a) in objects.iter().enumerate() {
        for b in &objects[i + 1..] {
            test_pair(a, b, flags, stats);
        }
    }
}
