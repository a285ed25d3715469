/// Body table, every sphere in the scene, in spawn order.
///
/// Distances and radii are scene units picked for readability, not to scale.

/// Sun.
pub const SUN_NAME: &str = "sun";
pub const SUN_TEXTURE: &str = "sun.jpg";
pub const SUN_RADIUS: f32 = 10.0;

/// Self-rotation applied to Earth on every frame, radians.
pub const EARTH_SPIN_PER_FRAME: f32 = 0.02;

/// Starfield: count, cube edge, seed.
pub const STAR_COUNT: usize = 1000;
pub const STAR_RANGE: f32 = 1000.0;
pub const STAR_SEED: u64 = 0x5EED_57A2;

/// A moon orbiting its planet's current position.
pub struct MoonDef {
    pub name: &'static str,
    pub texture: &'static str,
    pub radius: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
}

/// A planet orbiting the sun.
pub struct PlanetDef {
    pub name: &'static str,
    pub texture: &'static str,
    /// Starting position (x, y, z); y is kept for the whole session.
    pub position: (f32, f32, f32),
    pub radius: f32,
    pub orbit_radius: f32,
    /// Radians per second.
    pub orbit_speed: f32,
    /// Whether the faint orbit ring is drawn.
    pub show_orbit: bool,
    pub spin_per_frame: Option<f32>,
    pub moon: Option<MoonDef>,
}

pub const PLANET_COUNT: usize = 8;

pub fn planets() -> [PlanetDef; PLANET_COUNT] {
    [
        planet("mercury", "mercury.jpg", 30.0, 1.0, 0.2),
        planet("venus", "venus.jpg", 50.0, 1.5, 0.15),
        PlanetDef {
            show_orbit: true,
            spin_per_frame: Some(EARTH_SPIN_PER_FRAME),
            moon: Some(MoonDef {
                name: "moon",
                texture: "moon.jpg",
                radius: 0.5,
                orbit_radius: 5.0,
                orbit_speed: 0.4,
            }),
            ..planet("earth", "earth.jpg", 70.0, 2.0, 0.1)
        },
        planet("mars", "mars.jpg", 90.0, 1.8, 0.08),
        planet("jupiter", "jupiter.jpg", 120.0, 5.0, 0.05),
        planet("saturn", "saturn.jpg", 150.0, 4.5, 0.04),
        planet("uranus", "uranus.jpg", 180.0, 3.0, 0.03),
        planet("neptune", "neptune.jpg", 210.0, 3.2, 0.02),
    ]
}

/// A plain planet: starts on +X at its orbit radius, ring hidden, no spin, no moon.
fn planet(
    name: &'static str,
    texture: &'static str,
    orbit_radius: f32,
    radius: f32,
    orbit_speed: f32,
) -> PlanetDef {
    PlanetDef {
        name,
        texture,
        position: (orbit_radius, 0.0, 0.0),
        radius,
        orbit_radius,
        orbit_speed,
        show_orbit: false,
        spin_per_frame: None,
        moon: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_start_on_their_orbit() {
        for p in planets() {
            let (x, _, z) = p.position;
            assert!(((x * x + z * z).sqrt() - p.orbit_radius).abs() < 1e-4, "{}", p.name);
        }
    }

    #[test]
    fn only_earth_has_ring_spin_and_moon() {
        let planets = planets();
        let earth: Vec<_> = planets.iter().filter(|p| p.moon.is_some()).collect();
        assert_eq!(earth.len(), 1);
        assert_eq!(earth[0].name, "earth");
        assert!(earth[0].show_orbit);
        assert_eq!(earth[0].spin_per_frame, Some(EARTH_SPIN_PER_FRAME));
        assert_eq!(planets.iter().filter(|p| p.show_orbit).count(), 1);
    }

    #[test]
    fn orbits_get_slower_outward() {
        let planets = planets();
        for pair in planets.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
            assert!(pair[0].orbit_speed > pair[1].orbit_speed);
        }
    }
}
