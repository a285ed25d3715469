use bytemuck::{Pod, Zeroable};
use crate::core::rng::Rng;

/// One background star: position plus brightness.
/// Wire format: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub brightness: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 4;
}

/// Fixed cloud of point stars filling a cube centered on the origin.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<StarVertex>,
}

impl Starfield {
    /// Scatter `count` white stars uniformly in a cube of edge `range`.
    pub fn generate(count: usize, range: f32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let half = range / 2.0;
        let stars = (0..count)
            .map(|_| StarVertex {
                x: rng.next_centered(half),
                y: rng.next_centered(half),
                z: rng.next_centered(half),
                brightness: 1.0,
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[StarVertex] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Raw pointer to star data for host-side reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.stars.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_vertex_is_4_floats() {
        assert_eq!(std::mem::size_of::<StarVertex>(), StarVertex::FLOATS * 4);
    }

    #[test]
    fn generates_requested_count_inside_cube() {
        let field = Starfield::generate(1000, 1000.0, 99);
        assert_eq!(field.len(), 1000);
        for s in field.stars() {
            assert!(s.x.abs() <= 500.0 && s.y.abs() <= 500.0 && s.z.abs() <= 500.0);
            assert_eq!(s.brightness, 1.0);
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = Starfield::generate(64, 1000.0, 5);
        let b = Starfield::generate(64, 1000.0, 5);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn stars_fill_every_octant() {
        let field = Starfield::generate(1000, 1000.0, 1);
        let mut octants = [0usize; 8];
        for s in field.stars() {
            let i = (s.x >= 0.0) as usize | ((s.y >= 0.0) as usize) << 1 | ((s.z >= 0.0) as usize) << 2;
            octants[i] += 1;
        }
        assert!(octants.iter().all(|&n| n > 50), "octants = {:?}", octants);
    }
}
