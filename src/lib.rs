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

//! Detects which points, segments and triangles in a 3D scene touch at least
//! one other object.
//!
//! Records of three points are classified into objects, then a plane
//! partition search splits the scene by triangle planes so that only objects
//! straddling a plane are tested against its triangle.
//!
//! ```
//! use intersector::{IntersectionFinder, ObjectStorage, RawRecord};
//!
//! let records = vec![
//!     RawRecord::from_coords([0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]),
//!     RawRecord::from_coords([0.5, 0.5, -1.0, 0.5, 0.5, 1.0, 0.5, 0.5, 1.0]),
//!     RawRecord::from_coords([9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0]),
//! ];
//! let storage = ObjectStorage::classify(&records)?;
//! let result = IntersectionFinder::new(storage).compute_intersections()?;
//! assert_eq!(result.intersecting_numbers().collect::<Vec<_>>(), vec![0, 1]);
//! # Ok::<(), intersector::IntersectError>(())
//! ```

pub mod config;
pub mod error;
pub mod finder;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod objects;
pub mod operations;

pub use config::{FinderConfig, GeneratorParams, SearchStrategy};
pub use error::{IntersectError, IntersectResult};
pub use finder::{IntersectionFinder, ObjectsAndIntersections, PartitionStats};
pub use geometry::{Intersects, Plane, Point2, Point3, Segment2, Segment3, Triangle2, Triangle3, Vector2, Vector3};
pub use kernel::{Relation, Side};
pub use numeric::Scalar;
pub use objects::{GeometryObject, ObjectKind, ObjectStorage, RawRecord};
pub use operations::TrianglesGenerator;
