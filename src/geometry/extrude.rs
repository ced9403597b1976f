// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Tapered linear extrusion of a convex 2D polygon
//!
//! The per-axis `scale` applies at the top of the extrusion (z = height),
//! matching OpenSCAD's `linear_extrude(height, scale = [x, y])`. Because the
//! taper is linear, a single bottom ring and a single scaled top ring are
//! exact.

use super::{Mesh, Triangle, Vertex};
use anyhow::{bail, Result};
use nalgebra::{Point2, Point3, Vector2, Vector3};

pub fn extrude_polygon(polygon: &[Point2<f64>], height: f64, scale: Vector2<f64>) -> Result<Mesh> {
    if polygon.len() < 3 {
        bail!(
            "cannot extrude degenerate cross-section ({} vertices)",
            polygon.len()
        );
    }
    if height <= 0.0 {
        bail!("extrusion height must be positive, got {height}");
    }

    let n = polygon.len();
    let mut mesh = Mesh::with_capacity(n * 2 + 2, n * 4);

    let down = Vector3::new(0.0, 0.0, -1.0);
    let up = Vector3::new(0.0, 0.0, 1.0);

    let mut bottom = Vec::with_capacity(n);
    let mut top = Vec::with_capacity(n);
    for p in polygon {
        bottom.push(mesh.add_vertex(Vertex::new(Point3::new(p.x, p.y, 0.0), down)));
        top.push(mesh.add_vertex(Vertex::new(
            Point3::new(p.x * scale.x, p.y * scale.y, height),
            up,
        )));
    }

    // Caps - the cross-section is convex, so a fan is enough.
    // Polygon is counter-clockwise seen from above: top fan keeps the
    // winding, bottom fan reverses it.
    for i in 1..n - 1 {
        mesh.add_triangle(Triangle::new([bottom[0], bottom[i + 1], bottom[i]]));
        mesh.add_triangle(Triangle::new([top[0], top[i], top[i + 1]]));
    }

    // Side walls
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_triangle(Triangle::new([bottom[i], bottom[j], top[j]]));
        mesh.add_triangle(Triangle::new([bottom[i], top[j], top[i]]));
    }

    mesh.recompute_normals();
    Ok(mesh)
}
