//! Scene builder: sun, earth and moon nested in one another, two orbit rings
//! and a scattering of background stars.

use glam::Vec3;
use orrery_engine::{
    EngineContext, EngineError, Geometry, Material, MeshColor, MeshComponent, Node, NodeId, Side,
    Transform,
};

use crate::bodies::{
    Body, BODY_SEGMENTS, DISTANCE, MOON_DISTANCE, RING_COLOR, RING_SEGMENTS, RING_TILT,
    RING_WIDTH, STAR_COLOR, STAR_COUNT, STAR_RADIUS, STAR_SEGMENTS, STAR_SPREAD,
};

/// Handles to the nodes the frame updater and hit-tester care about.
#[derive(Debug, Clone)]
pub struct SolarScene {
    pub sun: NodeId,
    pub earth: NodeId,
    pub moon: NodeId,
    /// Ring around the earth at the moon's orbit; follows the earth.
    pub moon_ring: NodeId,
    pub stars: Vec<NodeId>,
}

impl SolarScene {
    /// Which body a node is, if it is one of the three.
    pub fn body_of(&self, id: NodeId) -> Option<Body> {
        if id == self.sun {
            Some(Body::Sun)
        } else if id == self.earth {
            Some(Body::Earth)
        } else if id == self.moon {
            Some(Body::Moon)
        } else {
            None
        }
    }
}

fn body_node(ctx: &mut EngineContext, body: Body) -> Node {
    let texture = ctx.textures.request(body.texture_path());
    Node::new().with_tag(body.label()).with_mesh(MeshComponent::new(
        Geometry::sphere(body.radius(), BODY_SEGMENTS),
        Material::textured(texture),
    ))
}

fn ring_node(tag: &str, radius: f32, center: Vec3) -> Node {
    Node::new()
        .with_tag(tag)
        .with_transform(Transform::new().with_position(center).with_rotation_x(RING_TILT))
        .with_mesh(MeshComponent::new(
            Geometry::ring(radius, radius + RING_WIDTH, RING_SEGMENTS),
            Material::phong(MeshColor::from_hex(RING_COLOR)).with_side(Side::Double),
        ))
}

/// Populate the scene. Textures are requested here and arrive later.
pub fn build(ctx: &mut EngineContext) -> Result<SolarScene, EngineError> {
    ctx.scene.add(ring_node("sun-ring", DISTANCE, Vec3::ZERO));
    let moon_ring = ctx.scene.add(ring_node(
        "moon-ring",
        MOON_DISTANCE,
        Vec3::new(DISTANCE, 0.0, 0.0),
    ));

    let sun_node = body_node(ctx, Body::Sun);
    let sun = ctx.scene.add(sun_node);
    let earth_node = body_node(ctx, Body::Earth);
    let earth = ctx.scene.add_child(sun, earth_node)?;
    let moon_node = body_node(ctx, Body::Moon);
    let moon = ctx.scene.add_child(earth, moon_node)?;

    let mut stars = Vec::with_capacity(STAR_COUNT);
    for _ in 0..STAR_COUNT {
        let position = Vec3::new(
            ctx.rng.spread(STAR_SPREAD),
            ctx.rng.spread(STAR_SPREAD),
            ctx.rng.spread(STAR_SPREAD),
        );
        let star = Node::new()
            .with_tag("star")
            .with_position(position)
            .with_mesh(MeshComponent::new(
                Geometry::sphere(STAR_RADIUS, STAR_SEGMENTS),
                Material::basic(MeshColor::from_hex(STAR_COLOR)),
            ));
        stars.push(ctx.scene.add(star));
    }

    Ok(SolarScene { sun, earth, moon, moon_ring, stars })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{GameConfig, MaterialKind, Viewport};

    fn built() -> (EngineContext, SolarScene) {
        let mut ctx = EngineContext::new(&GameConfig::default(), Viewport::new(800.0, 600.0));
        let scene = build(&mut ctx).unwrap();
        ctx.scene.propagate();
        (ctx, scene)
    }

    #[test]
    fn bodies_are_nested() {
        let (ctx, s) = built();
        assert_eq!(ctx.scene.children(s.sun), Some([s.earth].as_slice()));
        assert_eq!(ctx.scene.children(s.earth), Some([s.moon].as_slice()));
        assert!(ctx.scene.roots().contains(&s.sun));
        assert!(!ctx.scene.roots().contains(&s.earth));
    }

    #[test]
    fn two_hundred_stars_inside_the_cube() {
        let (ctx, s) = built();
        assert_eq!(s.stars.len(), 200);
        let half = STAR_SPREAD / 2.0;
        for &star in &s.stars {
            let p = ctx.scene.world_position(star).unwrap();
            assert!(p.abs().max_element() <= half, "star at {p:?}");
            assert!(ctx.scene.roots().contains(&star));
        }
    }

    #[test]
    fn textures_requested_per_body() {
        let (ctx, _) = built();
        let paths: Vec<String> = ctx.textures.pending().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["img/sun.jpg", "img/earth.jpg", "img/moon.jpg"]);
    }

    #[test]
    fn rings_are_double_sided() {
        let (ctx, s) = built();
        let sun_ring = ctx.scene.find_by_tag("sun-ring").unwrap();
        for ring in [sun_ring, s.moon_ring] {
            let mesh = ctx.scene.get(ring).unwrap().mesh.unwrap();
            assert_eq!(mesh.material.side, Side::Double);
        }
        let mesh = ctx.scene.get(s.moon_ring).unwrap().mesh.unwrap();
        assert_eq!(mesh.geometry, Geometry::ring(48.0, 49.0, RING_SEGMENTS));
        assert_eq!(mesh.material.color, MeshColor::WHITE);
    }

    #[test]
    fn stars_are_white_and_unlit() {
        let (ctx, s) = built();
        let mesh = ctx.scene.get(s.stars[0]).unwrap().mesh.unwrap();
        assert_eq!(mesh.material.color, MeshColor::WHITE);
        assert_eq!(mesh.material.kind, MaterialKind::Basic);
    }

    #[test]
    fn body_of_maps_only_the_three_bodies() {
        let (ctx, s) = built();
        assert_eq!(s.body_of(s.sun), Some(Body::Sun));
        assert_eq!(s.body_of(s.earth), Some(Body::Earth));
        assert_eq!(s.body_of(s.moon), Some(Body::Moon));
        assert_eq!(s.body_of(s.stars[0]), None);
        assert_eq!(s.body_of(s.moon_ring), None);
        assert_eq!(s.body_of(ctx.scene.find_by_tag("sun-ring").unwrap()), None);
    }
}
