use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Segments used for every orbit ring.
pub const ORBIT_PATH_SEGMENTS: usize = 64;
/// Default opacity of an orbit ring.
pub const ORBIT_PATH_ALPHA: f32 = 0.2;

/// Line vertex for orbit rings. Wire format: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct OrbitVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub alpha: f32,
}

impl OrbitVertex {
    pub const FLOATS: usize = 4;
}

/// A static closed ring around the origin on the y = 0 plane.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
    pub alpha: f32,
    pub visible: bool,
}

impl OrbitPath {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            alpha: ORBIT_PATH_ALPHA,
            visible: true,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Ring vertices, first point repeated at the end (segments + 1 points).
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..=ORBIT_PATH_SEGMENTS).map(move |i| {
            let theta = (i as f32 / ORBIT_PATH_SEGMENTS as f32) * std::f32::consts::TAU;
            Vec3::new(theta.cos() * self.radius, 0.0, theta.sin() * self.radius)
        })
    }
}

/// All orbit rings plus the flattened vertex buffer the host draws as line strips.
#[derive(Debug, Default)]
pub struct OrbitPaths {
    paths: Vec<OrbitPath>,
    vertices: Vec<OrbitVertex>,
    /// Vertex count of each visible ring, in draw order.
    strip_lengths: Vec<u32>,
    max_vertices: usize,
    /// Set when a ring is added or toggled; cleared by `rebuild`.
    dirty: bool,
}

impl OrbitPaths {
    pub fn new(max_vertices: usize) -> Self {
        Self {
            max_vertices,
            ..Default::default()
        }
    }

    /// Add a ring; returns its index.
    pub fn add(&mut self, path: OrbitPath) -> usize {
        self.paths.push(path);
        self.dirty = true;
        self.paths.len() - 1
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(path) = self.paths.get_mut(index) {
            if path.visible != visible {
                path.visible = visible;
                self.dirty = true;
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&OrbitPath> {
        self.paths.get(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Flatten visible rings into the vertex buffer.
    /// Rings that would overflow `max_vertices` are dropped whole.
    pub fn rebuild(&mut self) {
        self.dirty = false;
        self.vertices.clear();
        self.strip_lengths.clear();
        for path in self.paths.iter().filter(|p| p.visible && p.alpha > 0.0) {
            let needed = ORBIT_PATH_SEGMENTS + 1;
            if self.vertices.len() + needed > self.max_vertices {
                log::warn!("orbit paths: vertex budget {} exhausted", self.max_vertices);
                break;
            }
            self.vertices.extend(path.points().map(|p| OrbitVertex {
                x: p.x,
                y: p.y,
                z: p.z,
                alpha: path.alpha,
            }));
            self.strip_lengths.push(needed as u32);
        }
    }

    /// Rebuild only if rings changed since the last bake. Returns true if it did.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.rebuild();
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn vertices(&self) -> &[OrbitVertex] {
        &self.vertices
    }

    pub fn strip_lengths(&self) -> &[u32] {
        &self.strip_lengths
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw pointer to vertex data for host-side reads.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}
