//! Ray casting against scene meshes.
//!
//! Only bounding shapes are tested: spheres analytically, rings as a plane
//! plus annulus check. That is exact for the two primitives the engine knows.

use std::cmp::Ordering;
use glam::{Mat4, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::{Geometry, Side};
use crate::core::scene::Scene;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` is normalized here.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize_or_zero() }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// One intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Ray test for a shape placed in the world by `world`.
pub trait Intersect {
    /// Distance to the first visible surface crossing, if any.
    fn intersect(&self, ray: &Ray, world: &Mat4, side: Side) -> Option<f32>;
}

impl Intersect for Geometry {
    fn intersect(&self, ray: &Ray, world: &Mat4, side: Side) -> Option<f32> {
        match *self {
            Geometry::Sphere { radius, .. } => {
                let (scale, _, center) = world.to_scale_rotation_translation();
                intersect_sphere(ray, center, radius * scale.max_element(), side)
            }
            Geometry::Ring { inner, outer, .. } => intersect_ring(ray, world, inner, outer, side),
        }
    }
}

fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32, side: Side) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let entry = -b - root;
    let exit = -b + root;
    if entry >= 0.0 {
        Some(entry)
    } else if side == Side::Double && exit >= 0.0 {
        // Origin inside: only the inner (back) face is ahead.
        Some(exit)
    } else {
        None
    }
}

fn intersect_ring(ray: &Ray, world: &Mat4, inner: f32, outer: f32, side: Side) -> Option<f32> {
    let center = world.transform_point3(Vec3::ZERO);
    let normal = world.transform_vector3(Vec3::Z).normalize_or_zero();
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    // Front face looks along +normal, so a front hit travels against it.
    if side == Side::Front && denom > 0.0 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let local = world.inverse().transform_point3(ray.at(t));
    let r = (local.x * local.x + local.y * local.y).sqrt();
    (r >= inner && r <= outer).then_some(t)
}

/// Collects ray hits against every meshed node of a scene.
#[derive(Debug, Clone, Copy)]
pub struct Raycaster {
    pub near: f32,
    pub far: f32,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self { near: 0.0, far: f32::INFINITY }
    }
}

impl Raycaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// All hits within [near, far], nearest first.
    /// World matrices must be current (`Scene::propagate`).
    pub fn intersect_scene(&self, ray: &Ray, scene: &Scene) -> Vec<Hit> {
        let mut hits: Vec<Hit> = scene
            .iter()
            .filter_map(|(id, node)| {
                let mesh = node.mesh.as_ref()?;
                let world = scene.world_matrix(id)?;
                let distance = mesh.geometry.intersect(ray, &world, mesh.material.side)?;
                (distance >= self.near && distance <= self.far).then(|| Hit {
                    node: id,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;
    use crate::components::mesh::{Material, MeshColor, MeshComponent};
    use crate::core::scene::Node;
    use crate::core::transform::Transform;

    fn sphere_node(radius: f32, at: Vec3) -> Node {
        Node::new()
            .with_position(at)
            .with_mesh(MeshComponent::new(
                Geometry::sphere(radius, 16),
                Material::basic(MeshColor::WHITE),
            ))
    }

    #[test]
    fn sphere_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z);
        let t = Geometry::sphere(10.0, 8).intersect(&ray, &Mat4::IDENTITY, Side::Front);
        assert_eq!(t, Some(90.0));
    }

    #[test]
    fn sphere_miss() {
        let ray = Ray::new(Vec3::new(0.0, 50.0, 100.0), Vec3::NEG_Z);
        assert_eq!(Geometry::sphere(10.0, 8).intersect(&ray, &Mat4::IDENTITY, Side::Front), None);
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::Z);
        assert_eq!(Geometry::sphere(10.0, 8).intersect(&ray, &Mat4::IDENTITY, Side::Front), None);
    }

    #[test]
    fn scaled_sphere_uses_world_radius() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z);
        let world = Mat4::from_scale(Vec3::splat(2.0));
        let t = Geometry::sphere(10.0, 8).intersect(&ray, &world, Side::Front).unwrap();
        assert!((t - 80.0).abs() < 1e-3, "t = {t}");
    }

    #[test]
    fn ring_hit_inside_annulus_only() {
        // Ring laid flat in XZ (normal +Y), ray straight down.
        let world = Transform::new().with_rotation_x(-FRAC_PI_2).matrix();
        let ring = Geometry::ring(89.0, 90.0, 100);

        let on_band = Ray::new(Vec3::new(89.5, 50.0, 0.0), Vec3::NEG_Y);
        let in_hole = Ray::new(Vec3::new(10.0, 50.0, 0.0), Vec3::NEG_Y);

        let t = ring.intersect(&on_band, &world, Side::Double).unwrap();
        assert!((t - 50.0).abs() < 1e-3);
        assert_eq!(ring.intersect(&in_hole, &world, Side::Double), None);
    }

    #[test]
    fn single_sided_ring_ignores_back_face() {
        let world = Transform::new().with_rotation_x(-FRAC_PI_2).matrix();
        let ring = Geometry::ring(89.0, 90.0, 100);
        let from_below = Ray::new(Vec3::new(89.5, -50.0, 0.0), Vec3::Y);

        assert!(ring.intersect(&from_below, &world, Side::Double).is_some());
        assert_eq!(ring.intersect(&from_below, &world, Side::Front), None);
    }

    #[test]
    fn scene_hits_are_sorted_nearest_first() {
        let mut scene = Scene::new();
        let far = scene.add(sphere_node(5.0, Vec3::new(0.0, 0.0, -50.0)));
        let near = scene.add(sphere_node(5.0, Vec3::new(0.0, 0.0, 0.0)));
        scene.add(Node::new().with_tag("pivot"));
        scene.propagate();

        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z);
        let hits = Raycaster::new().intersect_scene(&ray, &scene);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].node, near);
        assert_eq!(hits[1].node, far);
        assert!((hits[0].point - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn far_plane_culls_hits() {
        let mut scene = Scene::new();
        scene.add(sphere_node(5.0, Vec3::ZERO));
        scene.propagate();

        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z);
        let caster = Raycaster { near: 0.0, far: 50.0 };
        assert!(caster.intersect_scene(&ray, &scene).is_empty());
    }
}
