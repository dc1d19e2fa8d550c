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

use proptest::prelude::*;

use intersector::{
    FinderConfig, GeneratorParams, IntersectError, IntersectionFinder, ObjectStorage, ObjectsAndIntersections,
    RawRecord, SearchStrategy, Side, TrianglesGenerator,
    finder::split_by_plane,
};

fn rec(c: [f64; 9]) -> RawRecord<f64> {
    RawRecord::from_coords(c)
}

fn point(x: f64, y: f64, z: f64) -> RawRecord<f64> {
    rec([x, y, z, x, y, z, x, y, z])
}

fn segment(a: [f64; 3], b: [f64; 3]) -> RawRecord<f64> {
    rec([a[0], a[1], a[2], b[0], b[1], b[2], b[0], b[1], b[2]])
}

fn run(records: &[RawRecord<f64>], config: FinderConfig) -> ObjectsAndIntersections<f64> {
    let storage = ObjectStorage::classify(records).unwrap();
    IntersectionFinder::with_config(storage, config).compute_intersections().unwrap()
}

fn flags(records: &[RawRecord<f64>]) -> Vec<bool> {
    run(records, FinderConfig::default()).intersection_flags().to_vec()
}

fn brute_flags(records: &[RawRecord<f64>]) -> Vec<bool> {
    run(records, FinderConfig::brute_force()).intersection_flags().to_vec()
}

#[test]
fn test_crossing_triangles_are_flagged() {
    let records = [
        rec([0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]),
        rec([1.0, 0.0, 0.0, 1.0, 2.0, 0.0, 1.0, -2.0, 1.0]),
    ];
    assert_eq!(flags(&records), vec![true, true]);
}

#[test]
fn test_parallel_triangles_are_not_flagged() {
    let records = [
        rec([0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]),
        rec([0.0, 0.0, 1.0, 2.0, 0.0, 1.0, 0.0, 2.0, 1.0]),
    ];
    assert_eq!(flags(&records), vec![false, false]);
}

#[test]
fn test_segment_touching_triangle_edge() {
    let records = [
        rec([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]),
        segment([2.0, 2.0, 0.0], [2.0, 2.0, 5.0]),
    ];
    assert_eq!(flags(&records), vec![true, true]);
}

#[test]
fn test_isolated_point_among_separated_objects() {
    let records = [
        rec([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]),
        segment([1.0, 1.0, -1.0], [1.0, 1.0, 1.0]),
        rec([20.0, 0.0, 0.0, 24.0, 0.0, 0.0, 20.0, 4.0, 0.0]),
        segment([-5.0, -5.0, -5.0], [-6.0, -5.0, -5.0]),
        point(10.0, 10.0, 10.0),
    ];
    let result = run(&records, FinderConfig::default());
    assert_eq!(result.intersection_flags(), &[true, true, false, false, false]);
    assert!(!result.is_object_intersects(4).unwrap());
    assert_eq!(result.intersecting_numbers().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(brute_flags(&records), result.intersection_flags());
}

#[test]
fn test_result_accessors() {
    let records = [
        point(0.0, 0.0, 0.0),
        rec([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
        segment([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    let result = run(&records, FinderConfig::default());
    assert_eq!(result.objects_num(), 3);
    assert_eq!(result.triangles_num(), 1);
    assert_eq!(result.segments_num(), 1);
    assert_eq!(result.points_num(), 1);
    assert_eq!(result.intersection_flags(), &[true, true, true]);
    assert_eq!(result.object(2).map(|o| o.number()), Some(2));
    assert!(result.stats().is_none());
    assert!(matches!(
        result.is_object_intersects(3),
        Err(IntersectError::InvalidIndex { index: 3, count: 3 })
    ));
}

#[test]
fn test_empty_and_single_inputs() {
    assert!(flags(&[]).is_empty());
    assert_eq!(flags(&[point(1.0, 1.0, 1.0)]), vec![false]);
    assert_eq!(flags(&[point(1.0, 1.0, 1.0), point(1.0, 1.0, 1.0)]), vec![true, true]);
}

#[test]
fn test_stats_are_reported_on_request() {
    let records = [
        rec([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]),
        point(1.0, 1.0, 3.0),
        point(1.0, 1.0, -3.0),
        segment([1.0, 1.0, -1.0], [1.0, 1.0, 1.0]),
    ];
    let result = run(&records, FinderConfig::default().with_stats(true));
    let stats = result.stats().copied().unwrap();
    assert_eq!(stats.triangle_splits, 1);
    assert_eq!(stats.both_sides, 1);
    assert!(stats.pair_tests < 6);
    assert_eq!(result.intersection_flags(), &[true, false, false, true]);
}

#[test]
fn test_long_coplanar_chain() {
    // Every triangle lies in z = 0, so each split keeps the whole remainder.
    let records: Vec<_> = (0..1500)
        .map(|i| {
            let x = 3.0 * f64::from(i);
            rec([x, 0.0, 0.0, x + 1.0, 0.0, 0.0, x, 1.0, 0.0])
        })
        .collect();
    let result = run(&records, FinderConfig::default().with_stats(true));
    assert!(result.intersection_flags().iter().all(|f| !f));
    assert_eq!(result.stats().map(|s| s.triangle_splits), Some(1499));
}

#[test]
fn test_generated_scene_matches_brute_force() {
    let params = GeneratorParams::default().with_count(250).with_area_size(20.0).with_seed(11);
    let records = TrianglesGenerator::new(params).unwrap().generate();
    let partition = flags(&records);
    assert_eq!(partition, brute_flags(&records));
    assert!(partition.iter().any(|f| *f));
}

#[test]
fn test_strategy_is_selectable() {
    let config = FinderConfig::default().with_strategy(SearchStrategy::BruteForce);
    let storage = ObjectStorage::<f64>::classify(&[]).unwrap();
    let finder = IntersectionFinder::with_config(storage, config);
    assert_eq!(finder.config().strategy, SearchStrategy::BruteForce);
}

#[test]
fn test_object_past_a_long_segment_end() {
    let plane_triangle = rec([1000.0005, 50.0, 50.0, 1000.0005, 60.0, 50.0, 1000.0005, 50.0, 60.0]);
    let long = segment([0.0, 0.0, 0.0], [1000.0, 0.0, 0.0]);

    let records = [plane_triangle, long, point(1000.0008, 0.0, 0.0)];
    assert_eq!(flags(&records), vec![false, false, false]);
    assert_eq!(brute_flags(&records), vec![false, false, false]);

    let records = [plane_triangle, long, point(1000.0000004, 0.0, 0.0)];
    assert_eq!(flags(&records), vec![false, true, true]);
    assert_eq!(brute_flags(&records), vec![false, true, true]);
}

#[test]
fn test_point_just_outside_a_small_triangle() {
    let records = [
        rec([0.0, 0.0, 0.0, 0.002, 0.0, 0.0, 0.0, 0.002, 0.0]),
        point(0.001, -0.0002, 0.0),
        segment([0.001, -0.0002, -1.0], [0.001, -0.0002, 1.0]),
        rec([-1.0, -1.0, 5.0, 1.0, -1.0, 5.0, -1.0, 1.0, 5.0]),
    ];
    assert_eq!(flags(&records), vec![false, true, true, false]);
    assert_eq!(brute_flags(&records), flags(&records));
}

#[test]
fn test_mixed_scale_scene_matches_brute_force() {
    let mut records = Vec::new();
    for (k, scale) in [1e-2, 0.25, 1.0, 40.0, 1000.0].into_iter().enumerate() {
        let o = 3.0 * k as f64;
        records.push(rec([o, 0.0, 0.0, o + 4.0 * scale, 0.0, 0.0, o, 4.0 * scale, 0.0]));
        records.push(segment([o + scale, scale, -scale], [o + scale, scale, scale]));
        records.push(segment([o + 4.0 * scale + 1e-4, 0.0, 0.0], [o + 5.0 * scale, 0.0, 0.0]));
        records.push(point(o + 2.0 * scale, 2.0 * scale, 0.0));
        records.push(point(o + 2.0 * scale, 2.0 * scale + 1e-4, 0.0));
    }
    let partition = flags(&records);
    assert_eq!(partition, brute_flags(&records));
    assert!(partition.iter().any(|f| *f));
}

fn arb_record() -> impl Strategy<Value = RawRecord<f64>> {
    prop::array::uniform9(0i32..8).prop_map(|c| RawRecord::from_coords(c.map(f64::from)))
}

fn arb_scene() -> impl Strategy<Value = Vec<RawRecord<f64>>> {
    prop::collection::vec(arb_record(), 0..40)
}

/// Quarter-step coordinates around an integer anchor, each record drawn at
/// its own scale: sub-unit triangles, long segments and near misses.
fn arb_scaled_record() -> impl Strategy<Value = RawRecord<f64>> {
    let scale = prop::sample::select(vec![1.0 / 64.0, 0.25, 1.0, 16.0, 256.0]);
    (prop::array::uniform3(0i32..8), prop::array::uniform9(-8i32..8), scale).prop_map(|(anchor, steps, scale)| {
        let mut c = [0.0; 9];
        for (i, v) in c.iter_mut().enumerate() {
            *v = f64::from(anchor[i % 3]) + f64::from(steps[i]) * 0.25 * scale;
        }
        RawRecord::from_coords(c)
    })
}

fn arb_scaled_scene() -> impl Strategy<Value = Vec<RawRecord<f64>>> {
    prop::collection::vec(arb_scaled_record(), 0..32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_partition_agrees_with_brute_force(records in arb_scene()) {
        prop_assert_eq!(flags(&records), brute_flags(&records));
    }

    #[test]
    fn prop_partition_agrees_with_brute_force_at_mixed_scales(records in arb_scaled_scene()) {
        prop_assert_eq!(flags(&records), brute_flags(&records));
    }

    #[test]
    fn prop_search_is_deterministic(records in arb_scene()) {
        prop_assert_eq!(flags(&records), flags(&records));
    }

    #[test]
    fn prop_every_flag_has_a_partner(records in arb_scene()) {
        let result = run(&records, FinderConfig::default());
        let storage = result.objects();
        for n in result.intersecting_numbers() {
            let a = storage.object(n).unwrap();
            let partnered = storage.iter().any(|b| b.number() != n && a.intersects(&b));
            prop_assert!(partnered, "object {} flagged without a partner", n);
        }
    }

    #[test]
    fn prop_split_never_drops_an_object(records in arb_scene()) {
        let storage = ObjectStorage::classify(&records).unwrap();
        let all: Vec<_> = storage.iter().collect();
        if let Some(plane) = all.first().and_then(|o| o.plane()) {
            let split = split_by_plane(plane, &all[1..]);
            for obj in &all[1..] {
                let n = obj.number();
                let in_neg = split.non_positive.iter().any(|o| o.number() == n);
                let in_pos = split.non_negative.iter().any(|o| o.number() == n);
                prop_assert!(in_neg || in_pos);
                let on = split.on_plane.iter().any(|o| o.number() == n);
                prop_assert_eq!(on, in_neg && in_pos);

                let sides: Vec<Side> = obj.sample_points().iter().map(|p| plane.side_of(p)).collect();
                if in_neg && !in_pos {
                    prop_assert!(sides.iter().all(|s| *s == Side::Negative));
                }
                if in_pos && !in_neg {
                    prop_assert!(sides.iter().all(|s| *s == Side::Positive));
                }
                if on {
                    let mixed = sides.contains(&Side::Positive) && sides.contains(&Side::Negative);
                    prop_assert!(sides.contains(&Side::On) || mixed);
                }
            }
        }
    }
}
