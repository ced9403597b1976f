// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Binary STL export and CSG-tree JSON dumps

use crate::ast::Node;
use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;

/// Export a mesh to binary STL
pub fn export_stl(mesh: &Mesh, path: &str) -> Result<()> {
    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles
        .iter()
        .map(|tri| {
            let v0 = &mesh.vertices[tri.indices[0]].position;
            let v1 = &mesh.vertices[tri.indices[1]].position;
            let v2 = &mesh.vertices[tri.indices[2]].position;

            // Face normal from winding; STL consumers ignore degenerate
            // normals, so an unnormalizable cross product exports as zero
            let cross = (v1 - v0).cross(&(v2 - v0));
            let normal = if cross.norm() > 1e-12 {
                cross.normalize()
            } else {
                cross
            };

            stl_io::Triangle {
                normal: stl_io::Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                vertices: [
                    stl_io::Vertex::new([v0.x as f32, v0.y as f32, v0.z as f32]),
                    stl_io::Vertex::new([v1.x as f32, v1.y as f32, v1.z as f32]),
                    stl_io::Vertex::new([v2.x as f32, v2.y as f32, v2.z as f32]),
                ],
            }
        })
        .collect();

    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    let mut writer = BufWriter::new(file);
    stl_io::write_stl(&mut writer, triangles.iter())
        .with_context(|| format!("Failed to write STL to {path}"))?;
    Ok(())
}

/// Dump the composed CSG tree as pretty-printed JSON
pub fn export_tree_json(node: &Node, path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), node)
        .with_context(|| format!("Failed to serialize tree to {path}"))?;
    Ok(())
}
