// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! CSG tree evaluator - lowers the expression tree to a mesh

use super::{Node, NodeKind, Profile};
use crate::geometry::{
    convex_hull_2d, csg_difference, csg_intersection, csg_union, extrude_polygon, sample_circle,
    Mesh, Primitive,
};
use anyhow::{Context, Result};
use dashmap::DashMap;
use nalgebra::{Matrix4, Point2};
use std::sync::Arc;

#[derive(Clone, Copy)]
enum BooleanOp {
    Union,
    Difference,
    Intersection,
}

/// Tree evaluator with per-node-id memoization
pub struct Evaluator {
    cache: Arc<DashMap<String, Mesh>>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Evaluate a node tree and return a mesh
    pub fn evaluate(&self, node: &Node) -> Result<Mesh> {
        if let Some(id) = &node.id {
            if let Some(mesh) = self.cache.get(id) {
                return Ok(mesh.clone());
            }
        }

        let mesh = self.evaluate_node(&node.kind, &Matrix4::identity())?;

        if let Some(id) = &node.id {
            self.cache.insert(id.clone(), mesh.clone());
        }

        Ok(mesh)
    }

    fn evaluate_node(&self, kind: &NodeKind, transform: &Matrix4<f64>) -> Result<Mesh> {
        match kind {
            NodeKind::Cube { size, center } => {
                let mut mesh = Primitive::cube(*size, *center).to_mesh();
                mesh.transform(transform);
                Ok(mesh)
            }

            NodeKind::Cylinder { h, r, fn_ } => {
                let mut mesh = Primitive::cylinder(*h, *r, *fn_).to_mesh();
                mesh.transform(transform);
                Ok(mesh)
            }

            NodeKind::Union(children) => {
                self.evaluate_boolean(children, transform, BooleanOp::Union)
            }

            NodeKind::Difference(children) => {
                self.evaluate_boolean(children, transform, BooleanOp::Difference)
            }

            NodeKind::Intersection(children) => {
                self.evaluate_boolean(children, transform, BooleanOp::Intersection)
            }

            NodeKind::Transform { op, children } => {
                let new_transform = transform * op.to_matrix();

                if children.len() == 1 {
                    self.evaluate_node(&children[0].kind, &new_transform)
                } else {
                    self.evaluate_boolean(children, &new_transform, BooleanOp::Union)
                }
            }

            NodeKind::LinearExtrude {
                profile,
                height,
                scale,
                convexity: _,
            } => {
                let polygon = lower_profile(profile);
                let mut mesh = extrude_polygon(&polygon, *height, *scale)
                    .context("Failed to extrude cross-section")?;
                mesh.transform(transform);
                Ok(mesh)
            }

            NodeKind::Empty => Ok(Mesh::empty()),
        }
    }

    fn evaluate_boolean(
        &self,
        children: &[Node],
        transform: &Matrix4<f64>,
        op: BooleanOp,
    ) -> Result<Mesh> {
        if children.is_empty() {
            return Ok(Mesh::empty());
        }

        let mut result = self
            .evaluate_node(&children[0].kind, transform)
            .context("Failed to evaluate first child")?;

        for child in &children[1..] {
            let child_mesh = self
                .evaluate_node(&child.kind, transform)
                .context("Failed to evaluate child")?;

            result = match op {
                BooleanOp::Union => csg_union(&result, &child_mesh),
                BooleanOp::Difference => csg_difference(&result, &child_mesh),
                BooleanOp::Intersection => csg_intersection(&result, &child_mesh),
            }
            .context("Boolean operation failed")?;
        }

        Ok(result)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten a 2D profile expression into a polygon point ring
fn lower_profile(profile: &Profile) -> Vec<Point2<f64>> {
    match profile {
        Profile::Circle { r, fn_ } => sample_circle(*r, *fn_),
        Profile::Scale { factors, child } => lower_profile(child)
            .into_iter()
            .map(|p| Point2::new(p.x * factors.x, p.y * factors.y))
            .collect(),
        Profile::Translate { offset, child } => lower_profile(child)
            .into_iter()
            .map(|p| Point2::new(p.x + offset.x, p.y + offset.y))
            .collect(),
        Profile::Hull(children) => {
            let points: Vec<Point2<f64>> = children.iter().flat_map(lower_profile).collect();
            convex_hull_2d(&points)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Vec2, Vec3};

    #[test]
    fn test_difference_with_transforms() {
        // difference() { cube(20); translate([5,5,-1]) cylinder(h=22, r=3); }
        let evaluator = Evaluator::new();

        let base = Node::cube(Vec3::new(20.0, 20.0, 20.0), false);
        let hole = Node::translate(Vec3::new(5.0, 5.0, -1.0), Node::cylinder(22.0, 3.0, 16));

        let mesh = evaluator
            .evaluate(&Node::difference(vec![base, hole]))
            .unwrap();
        assert!(mesh.vertex_count() > 0);
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn test_hull_extrusion_spans_both_circles() {
        let evaluator = Evaluator::new();

        let profile = Profile::hull(vec![
            Profile::translate(Vec2::new(0.0, 6.0), Profile::circle(2.0, 32)),
            Profile::translate(Vec2::new(0.0, -6.0), Profile::circle(2.0, 32)),
        ]);
        let node = Node::linear_extrude(profile, 10.0, Vec2::new(1.0, 1.0), 10);

        let mesh = evaluator.evaluate(&node).unwrap();
        let bbox = mesh.bounding_box();
        assert!((bbox.min.y + 8.0).abs() < 1e-9);
        assert!((bbox.max.y - 8.0).abs() < 1e-9);
        assert!((bbox.max.z - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_cached_node_reuses_mesh() {
        let evaluator = Evaluator::new();
        let node = Node::with_id(
            NodeKind::Cube {
                size: Vec3::new(10.0, 10.0, 10.0),
                center: false,
            },
            "base".into(),
        );

        let first = evaluator.evaluate(&node).unwrap();
        let second = evaluator.evaluate(&node).unwrap();
        assert_eq!(first.vertex_count(), second.vertex_count());
    }
}
