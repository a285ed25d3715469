use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Quat, Vec3};

/// Perspective camera looking down its local -Z axis.
///
/// Orientation is stored as a quaternion and only ever changed by
/// composition, so drag input accumulates without gimbal artifacts.
/// The projection matrix is cached; call `update_projection_matrix`
/// after touching `fov` or `aspect`.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Position in world space.
    pub position: Vec3,
    /// World-space orientation (unit quaternion).
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    projection: Mat4,
    /// Bumped on every projection refresh so the host can skip re-uploads.
    projection_generation: u32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// xyz = camera position, w = fov in degrees.
    pub position_fov: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 52;
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            fov,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
            projection_generation: 0,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Rotate the camera so its -Z axis points at `target`, keeping world Y up.
    pub fn look_at(&mut self, target: Vec3) {
        let back = self.position - target;
        if back.length_squared() < f32::EPSILON {
            return;
        }
        let z = back.normalize();
        let mut x = Vec3::Y.cross(z);
        if x.length_squared() < f32::EPSILON {
            // Looking straight up or down: any horizontal right vector works.
            x = Vec3::X;
        }
        let x = x.normalize();
        let y = z.cross(x);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
    }

    /// Recompute the cached projection from fov/aspect/near/far.
    pub fn update_projection_matrix(&mut self) {
        let aspect = if self.aspect > 0.0 { self.aspect } else { 1.0 };
        self.projection = Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far);
        self.projection_generation = self.projection_generation.wrapping_add(1);
        log::debug!("camera: projection refreshed (fov={:.2}, aspect={:.3})", self.fov, aspect);
    }

    /// Cached projection matrix (WebGPU clip space, depth in [0, 1]).
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World → view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    /// Direction the camera is facing, in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn projection_generation(&self) -> u32 {
        self.projection_generation
    }

    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        CameraUniform {
            view_proj: (self.projection * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            position_fov: [self.position.x, self.position.y, self.position.z, self.fov],
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn uniform_is_52_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::new(0.0, 150.0, 200.0);
        cam.look_at(Vec3::ZERO);
        let expected = (Vec3::ZERO - cam.position).normalize();
        assert!(approx(cam.forward(), expected), "forward = {:?}", cam.forward());
    }

    #[test]
    fn look_at_keeps_horizon_level() {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::new(0.0, 150.0, 200.0);
        cam.look_at(Vec3::ZERO);
        let right = cam.orientation * Vec3::X;
        assert!(right.y.abs() < 1e-5, "right = {:?}", right);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let mut cam = PerspectiveCamera::default();
        cam.position = Vec3::new(0.0, 150.0, 200.0);
        cam.look_at(Vec3::ZERO);
        let p = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-3 && p.y.abs() < 1e-3);
        assert!((p.z + 250.0).abs() < 1e-2, "p = {:?}", p);
    }

    #[test]
    fn projection_refresh_bumps_generation() {
        let mut cam = PerspectiveCamera::default();
        let before = cam.projection_generation();
        let old = cam.projection_matrix();
        cam.fov = 30.0;
        cam.update_projection_matrix();
        assert_eq!(cam.projection_generation(), before + 1);
        assert_ne!(cam.projection_matrix(), old);
    }

    #[test]
    fn projection_waits_for_refresh() {
        let mut cam = PerspectiveCamera::default();
        let old = cam.projection_matrix();
        cam.fov = 10.0;
        assert_eq!(cam.projection_matrix(), old);
    }
}
