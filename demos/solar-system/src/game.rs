/// Solar System: sun, eight planets on circular orbits, one moon.
///
/// Camera: drag to rotate, scroll to zoom (handled by the engine's
/// camera controller). Bodies move analytically with elapsed time.

use orrery::*;
use glam::Vec3;

use crate::bodies;

// ── Camera ───────────────────────────────────────────────────────────

const CAMERA_START: Vec3 = Vec3::new(0.0, 150.0, 200.0);
const CAMERA_TARGET: Vec3 = Vec3::ZERO;

// ── Scene struct ─────────────────────────────────────────────────────

pub struct SolarSystem {
    sun_id: Option<EntityId>,
    planet_ids: [Option<EntityId>; bodies::PLANET_COUNT],
    moon_id: Option<EntityId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            sun_id: None,
            planet_ids: [None; bodies::PLANET_COUNT],
            moon_id: None,
        }
    }

    fn spawn_body(
        ctx: &mut EngineContext,
        name: &str,
        texture_path: &str,
        pos: Vec3,
        radius: f32,
    ) -> EntityId {
        let texture = ctx.textures.resolve(name, texture_path);
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(name)
                .with_pos(pos)
                .with_mesh(MeshComponent::sphere(radius, texture)),
        );
        id
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 16,
            max_stars: bodies::STAR_COUNT,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Camera ───────────────────────────────────────────────────
        ctx.camera.position = CAMERA_START;
        ctx.camera.look_at(CAMERA_TARGET);

        // ── Starfield ────────────────────────────────────────────────
        ctx.starfield = Starfield::generate(bodies::STAR_COUNT, bodies::STAR_RANGE, bodies::STAR_SEED);

        // ── Sun ──────────────────────────────────────────────────────
        self.sun_id = Some(Self::spawn_body(
            ctx,
            bodies::SUN_NAME,
            bodies::SUN_TEXTURE,
            Vec3::ZERO,
            bodies::SUN_RADIUS,
        ));

        // ── Planets (+ moon) ─────────────────────────────────────────
        for (i, planet) in bodies::planets().into_iter().enumerate() {
            let (x, y, z) = planet.position;
            let pos = Vec3::new(x, y, z);
            let id = Self::spawn_body(ctx, planet.name, planet.texture, pos, planet.radius);
            ctx.orbits.add_body(id, Orbit::new(planet.orbit_radius, planet.orbit_speed));
            if let Some(step) = planet.spin_per_frame {
                ctx.orbits.set_spin(id, step);
            }

            let ring = OrbitPath::new(planet.orbit_radius);
            ctx.orbit_paths.add(if planet.show_orbit { ring } else { ring.hidden() });

            if let Some(moon) = planet.moon {
                let moon_pos = pos + Vec3::new(moon.orbit_radius, 0.0, 0.0);
                let moon_id = Self::spawn_body(ctx, moon.name, moon.texture, moon_pos, moon.radius);
                ctx.orbits.add_satellite(moon_id, id, Orbit::new(moon.orbit_radius, moon.orbit_speed));
                // The moon's ring exists but is fully transparent.
                ctx.orbit_paths.add(OrbitPath::new(moon.orbit_radius).with_alpha(0.0));
                self.moon_id = Some(moon_id);
            }

            self.planet_ids[i] = Some(id);
        }

        log::info!(
            "solar-system: {} bodies, {} textures",
            ctx.scene.len(),
            ctx.textures.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn pos_of(ctx: &EngineContext, id: Option<EntityId>) -> Vec3 {
        ctx.scene.get(id.unwrap()).unwrap().pos
    }

    #[test]
    fn spawns_sun_planets_and_moon() {
        let (game, ctx) = initialized();
        assert_eq!(ctx.scene.len(), 1 + bodies::PLANET_COUNT + 1);
        assert!(game.sun_id.is_some());
        assert!(game.moon_id.is_some());
        assert!(game.planet_ids.iter().all(|id| id.is_some()));
        assert_eq!(ctx.orbits.len(), bodies::PLANET_COUNT + 1);
        assert_eq!(ctx.starfield.len(), 1000);
    }

    #[test]
    fn moon_starts_beside_earth() {
        let (game, ctx) = initialized();
        let earth = pos_of(&ctx, game.planet_ids[2]);
        let moon = pos_of(&ctx, game.moon_id);
        assert_eq!(moon, earth + Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn camera_looks_at_the_sun() {
        let (_, ctx) = initialized();
        assert_eq!(ctx.camera.position, CAMERA_START);
        let dir = (CAMERA_TARGET - CAMERA_START).normalize();
        assert!((ctx.camera.forward() - dir).length() < 1e-4);
        assert_eq!(ctx.camera.fov, 75.0);
    }

    #[test]
    fn only_earth_ring_is_drawn() {
        let (_, mut ctx) = initialized();
        ctx.orbit_paths.rebuild();
        assert_eq!(ctx.orbit_paths.strip_lengths().len(), 1);
        let v = ctx.orbit_paths.vertices()[0];
        assert!((Vec3::new(v.x, v.y, v.z).length() - 70.0).abs() < 1e-3);
    }

    #[test]
    fn sun_stays_put_while_planets_orbit() {
        let (game, mut ctx) = initialized();
        ctx.clock.seek(25.0);
        ctx.step_orbits();

        assert_eq!(pos_of(&ctx, game.sun_id), Vec3::ZERO);
        for (planet, id) in bodies::planets().iter().zip(game.planet_ids) {
            let p = pos_of(&ctx, id);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - planet.orbit_radius).abs() < 1e-3, "{}: r = {}", planet.name, r);
        }
    }

    #[test]
    fn moon_orbits_earth_current_position() {
        let (game, mut ctx) = initialized();
        ctx.clock.seek(40.0);
        ctx.step_orbits();

        let earth = pos_of(&ctx, game.planet_ids[2]);
        let moon = pos_of(&ctx, game.moon_id);
        let expected = earth + Orbit::new(5.0, 0.4).offset_at(40.0);
        assert!((moon - expected).length() < 1e-3);
    }

    #[test]
    fn earth_spins_once_per_frame() {
        let (game, mut ctx) = initialized();
        for _ in 0..10 {
            ctx.step_orbits();
        }
        let spin = ctx.scene.get(game.planet_ids[2].unwrap()).unwrap().spin;
        assert!((spin - 0.2).abs() < 1e-5);
        let mars_spin = ctx.scene.get(game.planet_ids[3].unwrap()).unwrap().spin;
        assert_eq!(mars_spin, 0.0);
    }

    #[test]
    fn every_body_has_its_own_texture() {
        let (_, ctx) = initialized();
        assert_eq!(ctx.textures.len(), 10);
        assert_eq!(ctx.textures.get("earth"), Some(TextureId(3)));
    }
}
