use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// One instance per active entity that carries a mesh, in scene order.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.radius,
            spin: entity.spin,
            texture: mesh.texture.0 as f32,
            alpha: mesh.alpha,
            segments: mesh.width_segments as f32,
        };

        if !buffer.push(instance) {
            log::warn!("render: instance buffer full, dropping '{}'", entity.tag);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, TextureId};
    use crate::components::mesh::MeshComponent;
    use glam::Vec3;

    #[test]
    fn meshes_become_instances() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_tag("sun")
                .with_mesh(MeshComponent::sphere(10.0, TextureId(0))),
            Entity::new(EntityId(2))
                .with_tag("earth")
                .with_pos(Vec3::new(70.0, 0.0, 0.0))
                .with_spin(0.5)
                .with_mesh(MeshComponent::sphere(2.0, TextureId(3))),
            Entity::new(EntityId(3)).with_tag("pivot"),
        ];

        let mut buffer = RenderBuffer::with_capacity(8);
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let earth = buffer.instances[1];
        assert_eq!((earth.x, earth.y, earth.z), (70.0, 0.0, 0.0));
        assert_eq!(earth.radius, 2.0);
        assert_eq!(earth.spin, 0.5);
        assert_eq!(earth.texture, 3.0);
        assert_eq!(earth.segments, 32.0);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entity = Entity::new(EntityId(1))
            .with_mesh(MeshComponent::default());
        entity.active = false;

        let entities = vec![entity];
        let mut buffer = RenderBuffer::with_capacity(8);
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
