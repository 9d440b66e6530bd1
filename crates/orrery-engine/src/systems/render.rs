use crate::assets::textures::TextureRegistry;
use crate::core::scene::Scene;
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Build the render buffer from every meshed node in the scene.
/// World matrices must be current (`Scene::propagate`). A material's texture
/// is only bound once the host has reported it loaded.
pub fn build_render_buffer(scene: &Scene, textures: &TextureRegistry, buffer: &mut RenderBuffer) {
    buffer.clear();

    for (id, node) in scene.iter() {
        let mesh = match &node.mesh {
            Some(m) => m,
            None => continue,
        };
        let world = match scene.world_matrix(id) {
            Some(w) => w,
            None => continue,
        };

        let texture = textures.bound(mesh.material.texture);
        buffer.push(MeshInstance::new(&world, mesh, texture));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::components::mesh::{Geometry, Material, MeshColor, MeshComponent};
    use crate::core::scene::Node;

    #[test]
    fn pivots_are_skipped() {
        let mut scene = Scene::new();
        let pivot =
            scene.add(Node::new().with_tag("pivot").with_position(Vec3::new(5.0, 0.0, 0.0)));
        scene
            .add_child(
                pivot,
                Node::new().with_mesh(MeshComponent::new(
                    Geometry::sphere(1.0, 8),
                    Material::basic(MeshColor::WHITE),
                )),
            )
            .unwrap();
        scene.propagate();

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &TextureRegistry::new(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        // Child inherits the pivot's translation.
        assert_eq!(buffer.as_slice()[0].model[3][0], 5.0);
    }

    #[test]
    fn texture_bound_only_after_load() {
        let mut textures = TextureRegistry::new();
        let sun = textures.request("img/sun.jpg");

        let mut scene = Scene::new();
        scene.add(Node::new().with_mesh(MeshComponent::new(
            Geometry::sphere(30.0, 100),
            Material::textured(sun),
        )));
        scene.propagate();

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &textures, &mut buffer);
        assert_eq!(buffer.as_slice()[0].texture, -1.0);

        textures.resolve(sun, true).unwrap();
        build_render_buffer(&scene, &textures, &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.as_slice()[0].texture, sun.0 as f32);
    }
}
