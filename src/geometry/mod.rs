// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Geometry module - mesh representation and operations

mod bbox;
mod csg;
mod extrude;
mod mesh;
mod primitives;
mod profile;

pub use bbox::BoundingBox;
pub use csg::{csg_difference, csg_intersection, csg_union};
pub use extrude::extrude_polygon;
pub use mesh::{Mesh, Triangle, Vertex};
pub use primitives::Primitive;
pub use profile::{convex_hull_2d, sample_circle};
