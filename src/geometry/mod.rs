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

pub mod intersection;
pub mod plane;
pub mod point;
pub mod quaternion;
pub mod segment;
pub mod tri_tri_intersect;
pub mod triangle;
pub mod vector;

pub use intersection::{
    Intersects, check_intersection, point_point, segment_point, segment_segment, triangle_point,
    triangle_segment, triangle_triangle,
};
pub use plane::Plane;
pub use point::{Point, Point2, Point3};
pub use quaternion::NormalizedQuaternion;
pub use segment::{Segment, Segment2, Segment3};
pub use triangle::{Triangle2, Triangle3};
pub use vector::{Vector, Vector2, Vector3, VectorOps};
