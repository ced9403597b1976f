// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! CSG (Constructive Solid Geometry) operations using BSP trees

use super::{Mesh, Triangle, Vertex};
use anyhow::Result;
use nalgebra::{Point3, Vector3};

const EPSILON: f64 = 1e-5;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// BSP tree node for CSG operations
#[derive(Clone)]
struct BSPNode {
    plane: Option<Plane>,
    front: Option<Box<BSPNode>>,
    back: Option<Box<BSPNode>>,
    polygons: Vec<Polygon>,
}

#[derive(Clone)]
struct Plane {
    normal: Vector3<f64>,
    w: f64,
}

#[derive(Clone)]
struct Polygon {
    vertices: Vec<Vertex>,
}

impl Plane {
    fn from_points(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Option<Self> {
        let cross = (b - a).cross(&(c - a));
        if cross.norm() < EPSILON {
            return None;
        }
        let normal = cross.normalize();
        let w = normal.dot(&a.coords);
        Some(Self { normal, w })
    }

    fn classify_point(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) - self.w
    }

    fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Split a polygon by this plane into (front, back, coplanar_front,
    /// coplanar_back) pieces; spanning polygons are cut along the plane
    /// with edge interpolation
    fn split_polygon(
        &self,
        polygon: &Polygon,
    ) -> (Vec<Polygon>, Vec<Polygon>, Vec<Polygon>, Vec<Polygon>) {
        let mut front = Vec::new();
        let mut back = Vec::new();
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();

        let mut polygon_type = COPLANAR;
        let mut types = Vec::with_capacity(polygon.vertices.len());

        for v in &polygon.vertices {
            let dist = self.classify_point(&v.position);
            let t = if dist > EPSILON {
                FRONT
            } else if dist < -EPSILON {
                BACK
            } else {
                COPLANAR
            };
            polygon_type |= t;
            types.push(t);
        }

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.normal()) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                // Polygon spans the plane - cut it along the intersection
                let mut f: Vec<Vertex> = Vec::new();
                let mut b: Vec<Vertex> = Vec::new();

                for i in 0..polygon.vertices.len() {
                    let j = (i + 1) % polygon.vertices.len();
                    let ti = types[i];
                    let tj = types[j];
                    let vi = polygon.vertices[i];
                    let vj = polygon.vertices[j];

                    if ti != BACK {
                        f.push(vi);
                    }
                    if ti != FRONT {
                        b.push(vi);
                    }
                    if (ti | tj) == SPANNING {
                        let denom = self.normal.dot(&(vj.position - vi.position));
                        let t = (self.w - self.normal.dot(&vi.position.coords)) / denom;
                        let v = vi.lerp(&vj, t);
                        f.push(v);
                        b.push(v);
                    }
                }

                if f.len() >= 3 {
                    front.push(Polygon { vertices: f });
                }
                if b.len() >= 3 {
                    back.push(Polygon { vertices: b });
                }
            }
        }

        (front, back, coplanar_front, coplanar_back)
    }
}

impl Polygon {
    fn normal(&self) -> Vector3<f64> {
        if self.vertices.len() >= 3 {
            let a = &self.vertices[0].position;
            let b = &self.vertices[1].position;
            let c = &self.vertices[2].position;
            let cross = (b - a).cross(&(c - a));
            if cross.norm() > EPSILON {
                return cross.normalize();
            }
        }
        Vector3::new(0.0, 0.0, 1.0)
    }

    fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.normal = -v.normal;
        }
    }
}

impl BSPNode {
    fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        };

        if !polygons.is_empty() {
            node.build(polygons);
        }

        node
    }

    fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }

        if self.plane.is_none() {
            // Use the first non-degenerate polygon's plane
            for poly in &polygons {
                let v = &poly.vertices;
                if v.len() >= 3 {
                    if let Some(plane) =
                        Plane::from_points(&v[0].position, &v[1].position, &v[2].position)
                    {
                        self.plane = Some(plane);
                        break;
                    }
                }
            }
        }

        if let Some(plane) = self.plane.clone() {
            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in polygons {
                let (mut f, mut b, mut cf, mut cb) = plane.split_polygon(&poly);
                front_polys.append(&mut f);
                back_polys.append(&mut b);
                self.polygons.append(&mut cf);
                self.polygons.append(&mut cb);
            }

            if !front_polys.is_empty() {
                self.front
                    .get_or_insert_with(|| Box::new(BSPNode::new(Vec::new())))
                    .build(front_polys);
            }
            if !back_polys.is_empty() {
                self.back
                    .get_or_insert_with(|| Box::new(BSPNode::new(Vec::new())))
                    .build(back_polys);
            }
        } else {
            self.polygons = polygons;
        }
    }

    fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = self.polygons.clone();
        if let Some(ref front) = self.front {
            result.extend(front.all_polygons());
        }
        if let Some(ref back) = self.back {
            result.extend(back.all_polygons());
        }
        result
    }

    /// Remove all polygons in this tree that are inside the other tree
    fn clip_to(&mut self, bsp: &BSPNode) {
        self.polygons = bsp.clip_polygons(&self.polygons);
        if let Some(ref mut front) = self.front {
            front.clip_to(bsp);
        }
        if let Some(ref mut back) = self.back {
            back.clip_to(bsp);
        }
    }

    /// Recursively remove the parts of the polygons inside this solid
    fn clip_polygons(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        let plane = match self.plane {
            Some(ref plane) => plane,
            None => return polygons.to_vec(),
        };

        let mut front = Vec::new();
        let mut back = Vec::new();

        for poly in polygons {
            let (mut f, mut b, mut cf, mut cb) = plane.split_polygon(poly);
            front.append(&mut f);
            front.append(&mut cf);
            back.append(&mut b);
            back.append(&mut cb);
        }

        let front = if let Some(ref front_node) = self.front {
            front_node.clip_polygons(&front)
        } else {
            front
        };

        let back = if let Some(ref back_node) = self.back {
            back_node.clip_polygons(&back)
        } else {
            Vec::new()
        };

        let mut result = front;
        result.extend(back);
        result
    }

    fn invert(&mut self) {
        for poly in &mut self.polygons {
            poly.flip();
        }
        if let Some(ref mut plane) = self.plane {
            plane.flip();
        }
        std::mem::swap(&mut self.front, &mut self.back);
        if let Some(ref mut front) = self.front {
            front.invert();
        }
        if let Some(ref mut back) = self.back {
            back.invert();
        }
    }
}

/// Convert mesh to polygons
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangles
        .iter()
        .map(|tri| Polygon {
            vertices: vec![
                mesh.vertices[tri.indices[0]],
                mesh.vertices[tri.indices[1]],
                mesh.vertices[tri.indices[2]],
            ],
        })
        .collect()
}

/// Convert polygons back to mesh, fan-triangulating anything the splits
/// left with more than three vertices
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();

    for poly in polygons {
        if poly.vertices.len() < 3 {
            continue;
        }
        let v0 = mesh.add_vertex(poly.vertices[0]);
        for i in 1..poly.vertices.len() - 1 {
            let v1 = mesh.add_vertex(poly.vertices[i]);
            let v2 = mesh.add_vertex(poly.vertices[i + 1]);
            mesh.add_triangle(Triangle::new([v0, v1, v2]));
        }
    }

    mesh
}

/// Perform CSG union
pub fn csg_union(a: &Mesh, b: &Mesh) -> Result<Mesh> {
    // For union, simply merge meshes
    // Proper CSG would remove internal faces, but merging produces valid geometry
    let mut result = a.clone();
    result.merge(b);
    Ok(result)
}

/// Perform CSG difference using BSP trees
pub fn csg_difference(a: &Mesh, b: &Mesh) -> Result<Mesh> {
    let mut tree_a = BSPNode::new(mesh_to_polygons(a));
    let mut tree_b = BSPNode::new(mesh_to_polygons(b));

    // A - B: invert A, clip both ways, pull B's inverted shell back out
    tree_a.invert();
    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();

    let mut result_polys = tree_a.all_polygons();
    result_polys.extend(tree_b.all_polygons());

    let mut mesh = polygons_to_mesh(&result_polys);
    // Everything was built in inverted space; flip back
    for tri in &mut mesh.triangles {
        tri.indices.reverse();
    }
    for v in &mut mesh.vertices {
        v.normal = -v.normal;
    }
    Ok(mesh)
}

/// Perform CSG intersection using BSP trees
pub fn csg_intersection(a: &Mesh, b: &Mesh) -> Result<Mesh> {
    let mut tree_a = BSPNode::new(mesh_to_polygons(a));
    let mut tree_b = BSPNode::new(mesh_to_polygons(b));

    tree_a.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);

    let mut result_polys = tree_a.all_polygons();
    result_polys.extend(tree_b.all_polygons());

    let mut mesh = polygons_to_mesh(&result_polys);
    for tri in &mut mesh.triangles {
        tri.indices.reverse();
    }
    for v in &mut mesh.vertices {
        v.normal = -v.normal;
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::Vector3;

    #[test]
    fn test_csg_union() {
        let mesh_a = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
        let mesh_b = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();

        let mesh = csg_union(&mesh_a, &mesh_b).unwrap();
        assert_eq!(
            mesh.triangle_count(),
            mesh_a.triangle_count() + mesh_b.triangle_count()
        );
    }

    #[test]
    fn test_csg_difference_removes_volume() {
        let mesh_a = Primitive::cube(Vector3::new(20.0, 20.0, 20.0), true).to_mesh();
        let mesh_b = Primitive::cube(Vector3::new(10.0, 10.0, 50.0), true).to_mesh();

        let mesh = csg_difference(&mesh_a, &mesh_b).unwrap();
        assert!(mesh.triangle_count() > 0);
        // Outer extents are unchanged by carving a hole through the middle
        let bbox = mesh.bounding_box();
        assert!(bbox.approx_eq(&mesh_a.bounding_box(), 1e-6));
    }

    #[test]
    fn test_csg_intersection_bounds() {
        let mesh_a = Primitive::cube(Vector3::new(20.0, 20.0, 20.0), false).to_mesh();
        let mut mesh_b = Primitive::cube(Vector3::new(20.0, 20.0, 20.0), false).to_mesh();
        mesh_b.transform(&nalgebra::Matrix4::new_translation(&Vector3::new(
            10.0, 0.0, 0.0,
        )));

        let mesh = csg_intersection(&mesh_a, &mesh_b).unwrap();
        let bbox = mesh.bounding_box();
        assert!((bbox.min.x - 10.0).abs() < 1e-4);
        assert!((bbox.max.x - 20.0).abs() < 1e-4);
    }
}
