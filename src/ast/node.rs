// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! CSG tree node definitions

use serde::{Deserialize, Serialize};

/// 2D vector type alias
pub type Vec2 = nalgebra::Vector2<f64>;

/// 3D vector type alias
pub type Vec3 = nalgebra::Vector3<f64>;

/// A single operation or primitive in the CSG tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub id: Option<String>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, id: None }
    }

    pub fn with_id(kind: NodeKind, id: String) -> Self {
        Self { kind, id: Some(id) }
    }

    pub fn cube(size: Vec3, center: bool) -> Self {
        Self::new(NodeKind::Cube { size, center })
    }

    pub fn cylinder(h: f64, r: f64, fn_: u32) -> Self {
        Self::new(NodeKind::Cylinder { h, r, fn_ })
    }

    pub fn union(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Union(children))
    }

    pub fn difference(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Difference(children))
    }

    pub fn intersection(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Intersection(children))
    }

    pub fn translate(offset: Vec3, child: Node) -> Self {
        Self::new(NodeKind::Transform {
            op: TransformOp::Translate(offset),
            children: vec![child],
        })
    }

    /// Rotation in degrees around x, then y, then z
    pub fn rotate(angles: Vec3, child: Node) -> Self {
        Self::new(NodeKind::Transform {
            op: TransformOp::Rotate(angles),
            children: vec![child],
        })
    }

    pub fn scale(factors: Vec3, child: Node) -> Self {
        Self::new(NodeKind::Transform {
            op: TransformOp::Scale(factors),
            children: vec![child],
        })
    }

    pub fn linear_extrude(profile: Profile, height: f64, scale: Vec2, convexity: u32) -> Self {
        Self::new(NodeKind::LinearExtrude {
            profile,
            height,
            scale,
            convexity,
        })
    }
}

/// Types of CSG tree nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeKind {
    // Primitives
    Cube {
        size: Vec3,
        center: bool,
    },
    Cylinder {
        h: f64,
        r: f64,
        fn_: u32,
    },

    // Boolean operations
    Union(Vec<Node>),
    Difference(Vec<Node>),
    Intersection(Vec<Node>),

    // Transformations
    Transform {
        op: TransformOp,
        children: Vec<Node>,
    },

    // 2D profile swept into a tapered solid; `scale` applies per axis at
    // the top of the extrusion, `convexity` bounds downstream boolean
    // complexity for self-intersecting viewing paths
    LinearExtrude {
        profile: Profile,
        height: f64,
        scale: Vec2,
        convexity: u32,
    },

    // Empty node
    Empty,
}

impl NodeKind {
    /// Get child nodes
    pub fn get_children(&self) -> Vec<&Node> {
        match self {
            NodeKind::Union(children) => children.iter().collect(),
            NodeKind::Difference(children) => children.iter().collect(),
            NodeKind::Intersection(children) => children.iter().collect(),
            NodeKind::Transform { children, .. } => children.iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// Transformation operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransformOp {
    Translate(Vec3),
    /// Euler angles in degrees, applied x then y then z
    Rotate(Vec3),
    Scale(Vec3),
}

impl TransformOp {
    pub fn to_matrix(&self) -> nalgebra::Matrix4<f64> {
        match self {
            TransformOp::Translate(v) => nalgebra::Matrix4::new_translation(v),
            TransformOp::Rotate(deg) => {
                let rad = deg.map(|a| a.to_radians());
                nalgebra::Rotation3::from_euler_angles(rad.x, rad.y, rad.z).to_homogeneous()
            }
            TransformOp::Scale(v) => nalgebra::Matrix4::new_nonuniform_scaling(v),
        }
    }
}

/// 2D cross-section expression, consumed by `LinearExtrude`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Profile {
    Circle {
        r: f64,
        fn_: u32,
    },
    Scale {
        factors: Vec2,
        child: Box<Profile>,
    },
    Translate {
        offset: Vec2,
        child: Box<Profile>,
    },
    /// Convex hull of the child profiles' point sets
    Hull(Vec<Profile>),
}

impl Profile {
    pub fn circle(r: f64, fn_: u32) -> Self {
        Self::Circle { r, fn_ }
    }

    pub fn scale(factors: Vec2, child: Profile) -> Self {
        Self::Scale {
            factors,
            child: Box::new(child),
        }
    }

    pub fn translate(offset: Vec2, child: Profile) -> Self {
        Self::Translate {
            offset,
            child: Box::new(child),
        }
    }

    pub fn hull(children: Vec<Profile>) -> Self {
        Self::Hull(children)
    }
}
