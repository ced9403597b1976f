// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Mesh representation and utilities

use super::BoundingBox;
use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertex with position and normal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }

    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        self.position = matrix.transform_point(&self.position);
        // Transform normal (use inverse transpose for normals)
        let normal_matrix = matrix
            .try_inverse()
            .map(|m| m.transpose())
            .unwrap_or(*matrix);
        self.normal = normal_matrix.transform_vector(&self.normal).normalize();
    }

    /// Interpolate along the edge between two vertices
    pub fn lerp(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex {
            position: Point3::from(self.position.coords.lerp(&other.position.coords, t)),
            normal: self.normal.lerp(&other.normal, t),
        }
    }
}

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }
}

/// Triangular mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new()
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Transform all vertices by a matrix
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        for vertex in &mut self.vertices {
            vertex.transform(matrix);
        }
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Merge with another mesh (simple union without CSG)
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);

        for triangle in &other.triangles {
            self.triangles.push(Triangle::new([
                triangle.indices[0] + offset,
                triangle.indices[1] + offset,
                triangle.indices[2] + offset,
            ]));
        }
    }

    /// Recompute vertex normals from triangle geometry, area-weighted
    /// at shared vertices
    pub fn recompute_normals(&mut self) {
        if self.vertices.is_empty() || self.triangles.is_empty() {
            return;
        }

        let mut normal_sums: Vec<Vector3<f64>> = vec![Vector3::zeros(); self.vertices.len()];
        let mut normal_counts: Vec<u32> = vec![0; self.vertices.len()];

        for triangle in &self.triangles {
            let v0 = &self.vertices[triangle.indices[0]];
            let v1 = &self.vertices[triangle.indices[1]];
            let v2 = &self.vertices[triangle.indices[2]];

            let edge1 = v1.position - v0.position;
            let edge2 = v2.position - v0.position;
            let face_normal = edge1.cross(&edge2);

            let area = face_normal.norm();
            if area > 1e-10 {
                let normalized_face_normal = face_normal / area;
                for &idx in &triangle.indices {
                    normal_sums[idx] += normalized_face_normal * area;
                    normal_counts[idx] += 1;
                }
            }
        }

        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            if normal_counts[i] > 0 {
                vertex.normal = normal_sums[i].normalize();
            } else {
                vertex.normal = Vector3::new(0.0, 0.0, 1.0);
            }
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::Vector3;

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
        let b = Primitive::cube(Vector3::new(5.0, 5.0, 5.0), false).to_mesh();

        let verts_a = a.vertex_count();
        let tris_a = a.triangle_count();
        a.merge(&b);

        assert_eq!(a.vertex_count(), verts_a + b.vertex_count());
        assert_eq!(a.triangle_count(), tris_a + b.triangle_count());
        assert!(a
            .triangles
            .iter()
            .all(|t| t.indices.iter().all(|&i| i < a.vertex_count())));
    }

    #[test]
    fn test_transform_translates_bbox() {
        let mut mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
        let matrix = Matrix4::new_translation(&Vector3::new(5.0, 0.0, -2.0));
        mesh.transform(&matrix);

        let bbox = mesh.bounding_box();
        assert!((bbox.min.x - 5.0).abs() < 1e-9);
        assert!((bbox.min.z - -2.0).abs() < 1e-9);
        assert!((bbox.max.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertex_lerp_midpoint() {
        let a = Vertex::new(
            nalgebra::Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let b = Vertex::new(
            nalgebra::Point3::new(2.0, 4.0, 6.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.position, nalgebra::Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_recompute_normals_unit_length() {
        let mut mesh = Primitive::cylinder(10.0, 5.0, 32).to_mesh();
        mesh.recompute_normals();
        assert!(mesh.vertices.iter().all(|v| {
            let norm = v.normal.norm();
            norm > 0.9 && norm < 1.1
        }));
    }
}
