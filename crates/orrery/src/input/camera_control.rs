use glam::{Quat, Vec2};
use crate::input::queue::InputEvent;
use crate::renderer::camera::PerspectiveCamera;

/// Tuning for drag-rotate and wheel-zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Degrees of rotation per pixel of pointer travel.
    pub rotate_sensitivity: f32,
    /// Degrees of field of view per unit of wheel delta.
    pub zoom_rate: f32,
    /// Narrowest field of view (most zoomed in), degrees.
    pub min_fov: f32,
    /// Widest field of view (most zoomed out), degrees.
    pub max_fov: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.03,
            zoom_rate: 0.02,
            min_fov: 3.0,
            max_fov: 75.0,
        }
    }
}

/// Drag-to-rotate, scroll-to-zoom camera control.
///
/// Rotation is incremental: every move composes the rotation for the
/// delta since the *previous* move onto the current orientation, in
/// world space (`new = delta * current`). The reference point follows
/// the pointer, so the result depends on the path, not just the
/// distance from where the drag began.
#[derive(Debug, Clone)]
pub struct CameraController {
    config: ControllerConfig,
    dragging: bool,
    last_pointer: Vec2,
}

impl CameraController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = Vec2::new(x, y);
    }

    pub fn on_pointer_move(&mut self, camera: &mut PerspectiveCamera, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let pos = Vec2::new(x, y);
        let delta = pos - self.last_pointer;

        let pitch = (delta.y * self.config.rotate_sensitivity).to_radians();
        let yaw = (delta.x * self.config.rotate_sensitivity).to_radians();
        // XYZ Euler order with no roll.
        let step = Quat::from_rotation_x(pitch) * Quat::from_rotation_y(yaw);

        camera.orientation = (step * camera.orientation).normalize();
        self.last_pointer = pos;
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn on_wheel(&mut self, camera: &mut PerspectiveCamera, delta_y: f32) {
        let fov = camera.fov + delta_y * self.config.zoom_rate;
        camera.fov = fov.clamp(self.config.min_fov, self.config.max_fov);
        camera.update_projection_matrix();
    }

    /// Viewport changed size. Zero-area viewports (minimized tabs) are ignored.
    pub fn on_resize(&mut self, camera: &mut PerspectiveCamera, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("camera: ignoring resize to {}x{}", width, height);
            return;
        }
        camera.aspect = width / height;
        camera.update_projection_matrix();
    }

    /// Route one input event. Returns true if the camera consumed it.
    pub fn handle(&mut self, camera: &mut PerspectiveCamera, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.on_pointer_down(x, y);
                true
            }
            InputEvent::PointerMove { x, y } => {
                let was_dragging = self.dragging;
                self.on_pointer_move(camera, x, y);
                was_dragging
            }
            InputEvent::PointerUp { .. } => {
                self.on_pointer_up();
                true
            }
            InputEvent::Wheel { delta_y } => {
                self.on_wheel(camera, delta_y);
                true
            }
            InputEvent::Resize { width, height } => {
                self.on_resize(camera, width, height);
                true
            }
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
