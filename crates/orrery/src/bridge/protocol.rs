/// Shared-memory layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 52 floats]
/// [Instances: max_instances × 8 floats]
/// [Stars: max_stars × 4 floats]
/// [Orbit vertices: max_orbit_vertices × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::RenderInstance;
use crate::systems::orbit_path::OrbitVertex;
use crate::systems::starfield::StarVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_STARS: usize = 5;
pub const HEADER_STAR_COUNT: usize = 6;
pub const HEADER_MAX_ORBIT_VERTICES: usize = 7;
pub const HEADER_ORBIT_VERTEX_COUNT: usize = 8;
pub const HEADER_ELAPSED_SECONDS: usize = 9;
pub const HEADER_FOV: usize = 10;
pub const HEADER_ASPECT: usize = 11;
pub const HEADER_PROJECTION_GENERATION: usize = 12;
pub const HEADER_ELAPSED_FRACTION: usize = 13;
// 14..16 reserved

/// The frame counter wraps here so every value stays exact in an f32.
/// The host only compares it against the previous frame.
pub const FRAME_COUNTER_WRAP: u64 = 1 << 24;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body instances.
    pub max_instances: usize,
    /// Maximum stars.
    pub max_stars: usize,
    /// Maximum orbit ring vertices.
    pub max_orbit_vertices: usize,

    /// Size of camera section in floats.
    pub camera_floats: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of star data section in floats.
    pub star_data_floats: usize,
    /// Size of orbit vertex section in floats.
    pub orbit_data_floats: usize,

    /// Offset (in floats) where camera data begins.
    pub camera_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where orbit vertex data begins.
    pub orbit_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_stars: usize, max_orbit_vertices: usize) -> Self {
        let camera_floats = CameraUniform::FLOATS;
        let instance_data_floats = max_instances * RenderInstance::FLOATS;
        let star_data_floats = max_stars * StarVertex::FLOATS;
        let orbit_data_floats = max_orbit_vertices * OrbitVertex::FLOATS;

        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + camera_floats;
        let star_data_offset = instance_data_offset + instance_data_floats;
        let orbit_data_offset = star_data_offset + star_data_floats;

        let buffer_total_floats = orbit_data_offset + orbit_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_stars,
            max_orbit_vertices,
            camera_floats,
            instance_data_floats,
            star_data_floats,
            orbit_data_floats,
            camera_offset,
            instance_data_offset,
            star_data_offset,
            orbit_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_stars, config.max_orbit_vertices)
    }

    /// Fill the header for one frame. The lock slot is left for the host.
    pub fn write_header(&self, stats: &FrameStats, header: &mut [f32; HEADER_FLOATS]) {
        header[HEADER_FRAME_COUNTER] = (stats.frame % FRAME_COUNTER_WRAP) as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = stats.instance_count as f32;
        header[HEADER_MAX_STARS] = self.max_stars as f32;
        header[HEADER_STAR_COUNT] = stats.star_count.min(self.max_stars) as f32;
        header[HEADER_MAX_ORBIT_VERTICES] = self.max_orbit_vertices as f32;
        header[HEADER_ORBIT_VERTEX_COUNT] = stats.orbit_vertex_count as f32;
        // Whole seconds stay exact for ~194 days; the fraction carries sub-second detail.
        let elapsed = stats.elapsed.max(0.0);
        header[HEADER_ELAPSED_SECONDS] = elapsed.trunc() as f32;
        header[HEADER_ELAPSED_FRACTION] = elapsed.fract() as f32;
        header[HEADER_FOV] = stats.fov;
        header[HEADER_ASPECT] = stats.aspect;
        header[HEADER_PROJECTION_GENERATION] = stats.projection_generation as f32;
    }
}

/// Per-frame values that go into the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub instance_count: usize,
    pub star_count: usize,
    pub orbit_vertex_count: usize,
    pub elapsed: f64,
    pub fov: f32,
    pub aspect: f32,
    pub projection_generation: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_instances, 64);
        assert_eq!(layout.max_stars, 1000);
        assert_eq!(layout.max_orbit_vertices, 16 * 65);

        assert_eq!(layout.camera_floats, 52);
        assert_eq!(layout.instance_data_floats, 64 * 8);
        assert_eq!(layout.star_data_floats, 1000 * 4);
        assert_eq!(layout.orbit_data_floats, 16 * 65 * 4);

        let expected_total = 16 + 52 + 64 * 8 + 1000 * 4 + 16 * 65 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 20, 30);

        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.instance_data_offset, layout.camera_offset + layout.camera_floats);
        assert_eq!(layout.star_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.orbit_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.orbit_data_offset + layout.orbit_data_floats);
    }

    #[test]
    fn header_reports_counts_and_camera() {
        let layout = ProtocolLayout::new(64, 1000, 1040);
        let stats = FrameStats {
            frame: 120,
            instance_count: 10,
            star_count: 1000,
            orbit_vertex_count: 65,
            elapsed: 2.0,
            fov: 40.0,
            aspect: 1.5,
            projection_generation: 3,
        };
        let mut header = [0.0; HEADER_FLOATS];
        layout.write_header(&stats, &mut header);

        assert_eq!(header[HEADER_LOCK], 0.0);
        assert_eq!(header[HEADER_FRAME_COUNTER], 120.0);
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_INSTANCE_COUNT], 10.0);
        assert_eq!(header[HEADER_MAX_STARS], 1000.0);
        assert_eq!(header[HEADER_ORBIT_VERTEX_COUNT], 65.0);
        assert_eq!(header[HEADER_ELAPSED_SECONDS], 2.0);
        assert_eq!(header[HEADER_ELAPSED_FRACTION], 0.0);
        assert_eq!(header[HEADER_FOV], 40.0);
        assert_eq!(header[HEADER_PROJECTION_GENERATION], 3.0);
    }

    #[test]
    fn long_sessions_keep_header_exact() {
        let layout = ProtocolLayout::new(64, 1000, 1040);
        let stats = FrameStats {
            // About 3.3 days at 60 Hz, past where f32 stops counting by one.
            frame: FRAME_COUNTER_WRAP + 5,
            elapsed: 300_000.125,
            ..FrameStats::default()
        };
        let mut header = [0.0; HEADER_FLOATS];
        layout.write_header(&stats, &mut header);

        assert_eq!(header[HEADER_FRAME_COUNTER], 5.0);
        assert_eq!(header[HEADER_ELAPSED_SECONDS], 300_000.0);
        assert_eq!(header[HEADER_ELAPSED_FRACTION], 0.125);

        let mut next = header;
        layout.write_header(&FrameStats { frame: stats.frame + 1, ..stats }, &mut next);
        assert_ne!(next[HEADER_FRAME_COUNTER], header[HEADER_FRAME_COUNTER]);
    }

    #[test]
    fn header_fields_fit_in_header() {
        let fields = [
            HEADER_LOCK,
            HEADER_FRAME_COUNTER,
            HEADER_PROTOCOL_VERSION,
            HEADER_MAX_INSTANCES,
            HEADER_INSTANCE_COUNT,
            HEADER_MAX_STARS,
            HEADER_STAR_COUNT,
            HEADER_MAX_ORBIT_VERTICES,
            HEADER_ORBIT_VERTEX_COUNT,
            HEADER_ELAPSED_SECONDS,
            HEADER_FOV,
            HEADER_ASPECT,
            HEADER_PROJECTION_GENERATION,
            HEADER_ELAPSED_FRACTION,
        ];
        for (i, &f) in fields.iter().enumerate() {
            assert_eq!(f, i);
            assert!(f < HEADER_FLOATS);
        }
    }
}
