//! Circular orbit animation.
//!
//! Positions are an analytic function of absolute elapsed time, so a
//! frame at `t` always lands in the same place no matter how many frames
//! came before it. Self-rotation ("spin") is the one exception: it
//! advances by a fixed step per `update` call.

use std::f32::consts::TAU;

use glam::Vec3;
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// A circular orbit on the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Distance from the orbital center.
    pub radius: f32,
    /// Angular speed in radians per second (sign sets direction).
    pub speed: f32,
}

impl Orbit {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            speed,
        }
    }

    /// Phase angle at time `t`, radians.
    pub fn angle_at(&self, t: f64) -> f64 {
        self.speed as f64 * t
    }

    /// Offset from the orbital center at time `t`. Always y = 0.
    pub fn offset_at(&self, t: f64) -> Vec3 {
        let angle = self.angle_at(t);
        let r = self.radius as f64;
        Vec3::new((angle.cos() * r) as f32, 0.0, (angle.sin() * r) as f32)
    }
}

/// What a body revolves around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitCenter {
    /// The world origin; the body keeps its own y.
    Origin,
    /// Another body's position as of this frame.
    Body(EntityId),
}

/// Animation record for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitingBody {
    pub id: EntityId,
    pub orbit: Orbit,
    pub center: OrbitCenter,
    /// Radians added to the entity's spin on every update. The result wraps into [0, 2π).
    pub spin_step: Option<f32>,
}

/// Drives every orbiting body in the scene.
///
/// Bodies update in registration order. A satellite can only be added
/// once its parent is registered, so parents are always moved first.
#[derive(Debug, Default)]
pub struct OrbitAnimator {
    bodies: Vec<OrbitingBody>,
}

impl OrbitAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body orbiting the origin.
    pub fn add_body(&mut self, id: EntityId, orbit: Orbit) {
        self.bodies.push(OrbitingBody {
            id,
            orbit,
            center: OrbitCenter::Origin,
            spin_step: None,
        });
    }

    /// Register a body orbiting `parent`. Returns false if the parent is unknown.
    pub fn add_satellite(&mut self, id: EntityId, parent: EntityId, orbit: Orbit) -> bool {
        if self.get(parent).is_none() {
            log::warn!("orbit: satellite {:?} rejected, parent {:?} is not registered", id, parent);
            return false;
        }
        self.bodies.push(OrbitingBody {
            id,
            orbit,
            center: OrbitCenter::Body(parent),
            spin_step: None,
        });
        true
    }

    /// Spin a registered body by `step` radians per update.
    pub fn set_spin(&mut self, id: EntityId, step: f32) {
        if let Some(body) = self.bodies.iter_mut().find(|b| b.id == id) {
            body.spin_step = Some(step);
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Move every body to where it is at time `t` and advance spins by one step.
    pub fn update(&self, scene: &mut Scene, t: f64) {
        for body in &self.bodies {
            let offset = body.orbit.offset_at(t);
            let pos = match body.center {
                OrbitCenter::Origin => match scene.get(body.id) {
                    Some(entity) => Vec3::new(offset.x, entity.pos.y, offset.z),
                    None => continue,
                },
                OrbitCenter::Body(parent) => match scene.get(parent) {
                    Some(parent) => parent.pos + offset,
                    None => continue,
                },
            };

            if let Some(entity) = scene.get_mut(body.id) {
                entity.pos = pos;
                if let Some(step) = body.spin_step {
                    // Wrapped so the f32 never grows past the point where `step` rounds away.
                    entity.spin = (entity.spin + step).rem_euclid(TAU);
                }
            }
        }
    }
}
