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

//! Random test-data producer: well-formed triangles scattered over a cube.

use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    config::GeneratorParams,
    error::IntersectResult,
    geometry::{point::Point3, vector::Vector3},
    io::write_records_to_path,
    kernel::are_collinear,
    objects::RawRecord,
};

/// Draws triangles whose vertices lie within a box of side
/// `max_triangle_size`, placed at a random offset in `[0, area_size)³`.
/// Every triangle has three distinct, non-collinear vertices.
pub struct TrianglesGenerator {
    params: GeneratorParams,
    rng: StdRng,
}

impl TrianglesGenerator {
    pub fn new(params: GeneratorParams) -> IntersectResult<Self> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(TrianglesGenerator { params, rng })
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// A multiple of `1 / accuracy` in `[0, max)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn gen_number(&mut self, max: f64) -> f64 {
        let acc = f64::from(self.params.accuracy);
        let steps = (max * acc) as u64;
        self.rng.random_range(0..steps) as f64 / acc
    }

    fn gen_offset(&mut self, max: f64) -> Vector3<f64> {
        Vector3::new(self.gen_number(max), self.gen_number(max), self.gen_number(max))
    }

    fn gen_point(&mut self, shift: &Vector3<f64>) -> Point3<f64> {
        let size = self.params.max_triangle_size;
        let v = self.gen_offset(size);
        Point3::new(v.x(), v.y(), v.z()) + *shift
    }

    pub fn gen_triangle(&mut self) -> RawRecord<f64> {
        let shift = self.gen_offset(self.params.area_size);

        let p1 = self.gen_point(&shift);
        let mut p2 = self.gen_point(&shift);
        while p1.approx_eq(&p2) {
            p2 = self.gen_point(&shift);
        }
        let mut p3 = self.gen_point(&shift);
        while p1.approx_eq(&p3) || p2.approx_eq(&p3) || are_collinear(&p1, &p2, &p3) {
            p3 = self.gen_point(&shift);
        }

        RawRecord::new(p1, p2, p3)
    }

    pub fn generate(&mut self) -> Vec<RawRecord<f64>> {
        (0..self.params.count).map(|_| self.gen_triangle()).collect()
    }

    pub fn generate_to_path<P: AsRef<Path>>(&mut self, path: P) -> IntersectResult<usize> {
        let records = self.generate();
        write_records_to_path(&records, path.as_ref())?;
        info!(count = records.len(), path = %path.as_ref().display(), "Wrote generated triangles");
        Ok(records.len())
    }
}
